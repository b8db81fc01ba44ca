/// Reduces the configured model preference order to the candidates worth
/// attempting for one request.
///
/// When the live listing is unavailable the static order is used as-is; a
/// listing failure must degrade, not propagate. When the intersection with
/// the live set is empty the static order is also used as-is: a last-resort
/// attempt beats returning no candidates at all.
pub fn resolve_candidates(preference: &[String], live: Option<&[String]>) -> Vec<String> {
    let Some(live) = live else {
        return preference.to_vec();
    };

    let filtered: Vec<String> = preference
        .iter()
        .filter(|candidate| live.iter().any(|available| available == *candidate))
        .cloned()
        .collect();

    if filtered.is_empty() {
        return preference.to_vec();
    }

    filtered
}
