#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsheet::libs::data_storage::DataStorage;
    use tsheet::libs::secret::{Secret, TOKEN_FILE_NAME};

    struct SecretTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        test_token: String,
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("tsheet"));

            SecretTestContext {
                _temp_dir: temp_dir,
                storage,
                test_token: "1971800d4d82861d8f2c1651fea4d212".to_string(),
            }
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_secret_file_path_resolution(ctx: &mut SecretTestContext) {
        let first = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);
        let second = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);

        assert_eq!(first.path(), second.path());
        assert_eq!(first.path(), ctx.storage.base_path().join(TOKEN_FILE_NAME));
        assert!(!first.exists());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_store_and_load_roundtrip(ctx: &mut SecretTestContext) {
        let secret = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);
        secret.store(&ctx.test_token).unwrap();

        assert!(secret.exists());
        assert_eq!(secret.load().unwrap(), Some(ctx.test_token.clone()));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_token_is_not_stored_in_plaintext(ctx: &mut SecretTestContext) {
        let secret = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);
        secret.store(&ctx.test_token).unwrap();

        let content = fs::read_to_string(secret.path()).unwrap();
        assert!(!content.is_empty());
        assert!(!content.contains(&ctx.test_token));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_store_creates_data_directory(ctx: &mut SecretTestContext) {
        let storage = DataStorage::at(ctx.storage.base_path().join("nested").join("dir"));
        let secret = Secret::in_storage(&storage, TOKEN_FILE_NAME);
        assert!(!storage.base_path().exists());

        secret.store(&ctx.test_token).unwrap();

        assert!(storage.base_path().is_dir());
        assert_eq!(secret.load().unwrap(), Some(ctx.test_token.clone()));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_load_missing_secret(ctx: &mut SecretTestContext) {
        let secret = Secret::in_storage(&ctx.storage, ".missing");
        assert_eq!(secret.load().unwrap(), None);
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_store_overwrites_previous_value(ctx: &mut SecretTestContext) {
        let secret = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);
        secret.store("old-token").unwrap();
        secret.store(&ctx.test_token).unwrap();

        assert_eq!(secret.load().unwrap().as_deref(), Some(ctx.test_token.as_str()));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_corrupted_secret_is_an_error(ctx: &mut SecretTestContext) {
        let secret = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);
        fs::create_dir_all(ctx.storage.base_path()).unwrap();
        fs::write(secret.path(), "not base64 !!").unwrap();

        assert!(secret.load().is_err());
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_delete_secret(ctx: &mut SecretTestContext) {
        let secret = Secret::in_storage(&ctx.storage, TOKEN_FILE_NAME);
        secret.store(&ctx.test_token).unwrap();

        assert!(secret.delete().unwrap());
        assert!(!secret.exists());
        assert!(!secret.delete().unwrap());
    }
}
