use crate::config::{MAX_MARGIN, MAX_WIDTH_PX, MIN_WIDTH_PX, WIDTH_STEP_PX};
use crate::options::{ErrorCorrection, QrOptions, Rgba};

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate margin input (quiet zone in modules)
pub fn validate_margin(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(0), Some(MAX_MARGIN), "Margin")
}

/// Parse a size slider value, snapped to the slider step and clamped to its range.
pub fn parse_width(input: &str) -> Result<u32, String> {
    let raw: u32 = validate_numeric_input(input, None, None, "Size")?;
    let offset = QrOptions::clamp_width(raw) - MIN_WIDTH_PX;
    let snapped = MIN_WIDTH_PX + (offset + WIDTH_STEP_PX / 2) / WIDTH_STEP_PX * WIDTH_STEP_PX;
    Ok(snapped.min(MAX_WIDTH_PX))
}

/// Parse a color picker value.
pub fn parse_color(input: &str) -> Result<Rgba, String> {
    input.parse::<Rgba>().map_err(|e| e.to_string())
}

/// Parse an error correction `<select>` value.
pub fn parse_error_correction(input: &str) -> Result<ErrorCorrection, String> {
    input.parse()
}
