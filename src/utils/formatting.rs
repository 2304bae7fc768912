/// Format a currency amount with two decimals and thousands separators.
pub fn format_currency(amount: f64) -> String {
    format_money(amount, 2)
}

/// Format a currency amount truncated to whole units, as used on chart labels.
pub fn format_currency_whole(amount: f64) -> String {
    format_money(amount.trunc(), 0)
}

pub fn format_minutes(minutes: f64) -> String {
    format!("{} min", group_thousands(&format!("{:.2}", minutes.abs()), minutes < 0.0))
}

pub fn format_count(value: f64) -> String {
    group_thousands(&format!("{:.0}", value.trunc().abs()), value < 0.0)
}

fn format_money(amount: f64, decimals: usize) -> String {
    let digits = format!("{:.*}", decimals, amount.abs());
    // avoid negative zero display
    let negative = amount < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0');
    let grouped = group_thousands(&digits, false);
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
