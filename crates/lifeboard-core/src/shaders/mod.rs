/// Flat-colour cell quad shader
pub fn cell() -> &'static str {
    include_str!("cell.wgsl")
}
