//! Number stringification matching the way browsers print numbers.

/// Formats `n` the way `String(n)` does in a browser.
///
/// Integral values print without a fractional part, non-finite values print
/// as `NaN` / `Infinity`, and very large or very small magnitudes switch to
/// exponent notation with an explicit sign.
///
/// ```
/// use nerv_utils::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	if n == 0.0 {
		// Covers -0.0 as well
		return "0".to_string();
	}

	let abs = n.abs();
	if abs >= 1e21 || abs < 1e-6 {
		let formatted = format!("{:e}", n);
		return match formatted.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
			_ => formatted,
		};
	}

	n.to_string()
}
