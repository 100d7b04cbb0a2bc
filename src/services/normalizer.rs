/// Canonicalizes text before stemming.
///
/// Drops everything that is neither alphanumeric nor whitespace, lowercases
/// what is left and collapses runs of the same character ("heeellooo" becomes
/// "helo"). Runs are collapsed on the output stream, so characters brought
/// together by a dropped symbol ("b.a.a.d") collapse too and a second pass is
/// a no-op.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;

    for c in text.chars() {
        if !keep(c) {
            continue;
        }
        for lower in c.to_lowercase().filter(|l| keep(*l)) {
            if last != Some(lower) {
                out.push(lower);
                last = Some(lower);
            }
        }
    }

    out
}

fn keep(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace()
}
