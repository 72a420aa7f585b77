/// Normaliza una respuesta de texto libre: recorta los extremos y pasa a minúsculas.
/// Los espacios interiores se respetan.
pub fn normalize_free_text(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_free_text;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_free_text("  Çatalhöyük\t"), "çatalhöyük");
        assert_eq!(normalize_free_text("Tell  Brak"), "tell  brak");
        assert_eq!(normalize_free_text("   "), "");
    }
}
