//! Value parsers for CLI arguments

/// Edge given on the command line as `A:B:WEIGHT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: i32,
}

/// Parse `A:B:WEIGHT`; labels may not be empty and the weight may not be negative
pub fn parse_edge_spec(s: &str) -> Result<EdgeSpec, String> {
    let mut parts = s.rsplitn(2, ':');
    let (Some(weight), Some(ends)) = (parts.next(), parts.next()) else {
        return Err(format!("expected A:B:WEIGHT, got '{}'", s));
    };
    let Some((a, b)) = ends.split_once(':') else {
        return Err(format!("expected A:B:WEIGHT, got '{}'", s));
    };
    if a.is_empty() || b.is_empty() {
        return Err(format!("edge '{}' has an empty vertex label", s));
    }
    let weight: i32 = weight
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight '{}': {}", weight, e))?;
    if weight < 0 {
        return Err(format!("negative weight {} is not supported", weight));
    }
    Ok(EdgeSpec {
        a: a.to_string(),
        b: b.to_string(),
        weight,
    })
}
