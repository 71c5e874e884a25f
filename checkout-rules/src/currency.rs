use tracing::instrument;

pub const WON_SYMBOL: char = '₩';

/// Digits of `amount` with a comma between every group of three.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render an amount the way the ko-KR locale displays KRW: the won sign
/// directly followed by the comma-grouped integer, e.g. `₩10,000`.
#[instrument(level = "trace")]
pub fn format_currency(amount: u64) -> String {
    let mut out = String::new();
    out.push(WON_SYMBOL);
    out.push_str(&group_thousands(amount));
    out
}
