use crate::models::article::parse_date;

/// EUR with en-US grouping and two decimals, e.g. `€1,234.50`.
pub fn format_eur(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}€{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Whole euros, as on the spending cards: `€12,340`.
pub fn format_eur_whole(amount: f64) -> String {
    let whole = amount.floor() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}€{}", group_thousands(whole.unsigned_abs()))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `DD/MM/YYYY`; unparseable input is returned unchanged.
pub fn format_date_dmy(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// One decimal place, or a bare `0` when there is nothing to divide by.
pub fn format_pct(part: usize, total: usize) -> String {
    if total == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", percentage(part, total))
    }
}

/// `part / total * 100` rounded to one decimal; `0.0` when `total == 0`.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}
