//! Rupee formatting with Indian digit grouping.

pub const RUPEE: char = '₹';

/// Group digits the Indian way: the last three, then pairs (`1,00,000`).
#[must_use]
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Format a whole-rupee amount for display (`₹3,399`, `-₹500`).
#[must_use]
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{RUPEE}{}", group_indian(amount.unsigned_abs()))
}
