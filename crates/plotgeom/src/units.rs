pub const SQ_METERS_PER_HECTARE: f64 = 10_000.0;

/// Convert square metres to hectares.
#[inline] pub fn to_hectares(square_meters: f64) -> f64 { square_meters / SQ_METERS_PER_HECTARE }

/// Convert hectares to square metres.
#[inline] pub fn to_square_meters(hectares: f64) -> f64 { hectares * SQ_METERS_PER_HECTARE }

/// Human-readable area, e.g. "2.50 ha" or "0.25 ha (2,500 m²)" below one hectare.
pub fn format_area(hectares: f64) -> String {
    if hectares < 1.0 {
        let m2 = to_square_meters(hectares).round() as u64;
        format!("{hectares:.2} ha ({} m²)", group_thousands(m2))
    } else {
        format!("{hectares:.2} ha")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(',') }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hectare_conversion() {
        assert_eq!(to_hectares(25_000.0), 2.5);
        assert!((to_square_meters(0.01) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn format_small_and_large() {
        assert_eq!(format_area(0.25), "0.25 ha (2,500 m²)");
        assert_eq!(format_area(0.01), "0.01 ha (100 m²)");
        assert_eq!(format_area(12.5), "12.50 ha");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
