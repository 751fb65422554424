/// Name-contains gate.
///
/// Passes (the action should proceed) when `name` does NOT contain
/// `name_contains`, ignoring case. Items whose name matches are skipped by
/// every gated action, so a recipe can exclude e.g. drafts or templates.
pub fn name_passes_gate(name: &str, name_contains: &str) -> bool {
    !name
        .to_lowercase()
        .contains(&name_contains.to_lowercase())
}
