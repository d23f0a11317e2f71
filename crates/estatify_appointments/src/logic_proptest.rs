use crate::logic::{parse_requested_status, validate_meeting_link};
use proptest::prelude::*;

proptest! {
    // Only the three enumerated values ever parse; everything else is an
    // invalid argument, never coerced to a default.
    #[test]
    fn arbitrary_strings_outside_the_enumeration_fail(s in "\\PC*") {
        prop_assume!(s != "pending" && s != "confirmed" && s != "cancelled");
        prop_assert!(parse_requested_status(&s).is_err());
    }

    #[test]
    fn whitespace_only_links_are_rejected(s in "[ \\t\\r\\n]*") {
        prop_assert!(validate_meeting_link(&s).is_err());
    }

    #[test]
    fn padded_links_with_content_are_accepted(s in "[ ]{0,3}[a-zA-Z0-9:/._-]{1,40}[ ]{0,3}") {
        prop_assert!(validate_meeting_link(&s).is_ok());
    }
}
