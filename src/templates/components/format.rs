use crate::domain::Community;
use crate::errors::CatalogError;
use tracing::debug;

/// Amount with comma thousands separators and at most two fraction digits,
/// e.g. `1,250,000` or `199,999.99`. Trailing zero cents are dropped.
pub fn format_thousands(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", cents.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if cents < 0.0 {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Image to show for a community, substituting `fallback` when it has none.
pub fn image_src<'a>(community: &'a Community, fallback: &'a str) -> &'a str {
    if community.img_url.trim().is_empty() {
        let err = CatalogError::ImageUnavailable(community.id.clone());
        debug!(error = %err, "using fallback image");
        fallback
    } else {
        &community.img_url
    }
}
