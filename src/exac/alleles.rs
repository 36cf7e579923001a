/// Removes the trailing run shared by `reference` and `alternate`.
///
/// Trimming stops as soon as either allele is down to a single base, so
/// neither side is ever empty.
pub fn trim_shared_suffix<'a>(reference: &'a str, alternate: &'a str) -> (&'a str, &'a str) {
    let mut reference = reference;
    let mut alternate = alternate;
    while let (Some(r), Some(a)) = (reference.chars().next_back(), alternate.chars().next_back()) {
        if r != a || reference.len() <= r.len_utf8() || alternate.len() <= a.len_utf8() {
            break;
        }
        reference = &reference[..reference.len() - r.len_utf8()];
        alternate = &alternate[..alternate.len() - a.len_utf8()];
    }
    (reference, alternate)
}
