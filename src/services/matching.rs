//! Donor lookup for a requested blood group.
//!
//! Matching is exact string equality on `blood_group`. No ABO/Rh
//! compatibility is inferred: an `O-` request only matches `O-` donors.

use crate::models::Member;

/// Members whose blood group equals `target`, in input order.
///
/// An unrecognised target is not an error, it just matches nobody
/// (unless a stored record carries that exact value).
pub fn find_matching_donors<'a>(members: &'a [Member], target: &str) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|member| member.blood_group == target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::member;

    #[test]
    fn test_returns_exact_matches_in_order() {
        let members = vec![
            member("Asha", "O-"),
            member("Brian", "A+"),
            member("Chloe", "O-"),
        ];

        let matched = find_matching_donors(&members, "O-");
        let names: Vec<_> = matched.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Chloe"]);
    }

    #[test]
    fn test_no_compatibility_reasoning() {
        let members = vec![member("Asha", "O-"), member("Brian", "O+")];
        let matched = find_matching_donors(&members, "O+");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Brian");
    }

    #[test]
    fn test_empty_roster() {
        assert!(find_matching_donors(&[], "AB+").is_empty());
    }

    #[test]
    fn test_unknown_or_empty_target_matches_nothing() {
        let members = vec![member("Asha", "O-"), member("Brian", "A+")];
        assert!(find_matching_donors(&members, "").is_empty());
        assert!(find_matching_donors(&members, "Z+").is_empty());
        assert!(find_matching_donors(&members, "o-").is_empty());
    }

    #[test]
    fn test_empty_target_matches_literal_empty_group() {
        let members = vec![member("Asha", ""), member("Brian", "A+")];
        let matched = find_matching_donors(&members, "");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Asha");
    }
}
