//! Width/height extraction from record metadata.

use serde_json::Value as JsonValue;

/// Positive pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}x{}", width, height)]
pub struct Dimensions {
    /// Width in pixels, always > 0
    pub width: u32,
    /// Height in pixels, always > 0
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting zero on either axis.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

/// Read the declared `width` and `height` out of record metadata.
///
/// Accepts JSON integers, integral floats (`300.0`) and numeric strings
/// (`"300"`). Returns `None` if metadata is absent, either key is missing, or
/// either value is not a positive integer that fits in `u32`.
pub fn extract_dimensions(metadata: Option<&JsonValue>) -> Option<Dimensions> {
    let map = metadata?.as_object()?;
    let width = positive_dimension(map.get("width")?)?;
    let height = positive_dimension(map.get("height")?)?;
    Dimensions::new(width, height)
}

fn positive_dimension(value: &JsonValue) -> Option<u32> {
    let raw = match value {
        JsonValue::Number(n) => match n.as_u64() {
            Some(v) => v,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 || f <= 0.0 || f > u32::MAX as f64 {
                    return None;
                }
                f as u64
            }
        },
        JsonValue::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(raw).ok().filter(|v| *v > 0)
}
