#[cfg(test)]
mod tests {

    use crate::plotting::grid;
    use crate::types::*;

    #[test]
    fn test_grid() -> GenericResult<()> {
        let get_data = |index: Index2| {
            if index.x == 0 {
                return None;
            }

            return Some(((index.x as Scalar) / 15.0).sin() * ((index.y as Scalar) / 10.0).cos());
        };

        let file = std::env::temp_dir().join("rsheat-test-grid.png");
        grid(
            dim!(200, 200),
            dim!(30, 20),
            get_data,
            file.to_string_lossy().to_string(),
            None,
            None,
        )?;

        assert!(file.exists());
        std::fs::remove_file(file)?;

        Ok(())
    }
}
