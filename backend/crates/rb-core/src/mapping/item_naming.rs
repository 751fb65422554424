/// Name given to a cloned item: the first space-delimited word of the
/// source board's name (boards are named "<Campaign> ...").
pub fn clone_item_name(source_board_name: &str) -> String {
    source_board_name
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}
