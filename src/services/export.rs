use chrono::NaiveDate;

use crate::models::Member;

const HEADER: [&str; 5] = ["Name", "Blood Group", "Phone", "Email", "Registration Date"];

/// Member roster as CSV, one line per member, `\n` separated.
pub fn members_csv(members: &[Member]) -> String {
    let mut lines = Vec::with_capacity(members.len() + 1);
    lines.push(HEADER.join(","));

    for member in members {
        let registered = member.registered_at.format("%-m/%-d/%Y").to_string();
        let row = [
            member.name.as_str(),
            member.blood_group.as_str(),
            member.phone.as_str(),
            member.email.as_str(),
            registered.as_str(),
        ];
        lines.push(
            row.iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("club-members-{}.csv", today.format("%Y-%m-%d"))
}

fn escape_field(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
