//! Repository modules for database access
//!
//! This module contains the appointment store interface and its SQL and
//! in-memory implementations.

pub mod appointment;
pub mod appointment_factory;
pub mod appointment_memory;
pub mod appointment_sql;

// Re-export the appointment repository pieces for ease of use
pub use appointment::{Appointment, AppointmentRepository, AppointmentStatus};
pub use appointment_factory::AppointmentRepositoryFactory;
pub use appointment_memory::InMemoryAppointmentRepository;
pub use appointment_sql::SqlAppointmentRepository;
