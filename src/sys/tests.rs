#![cfg(test)]

use std::env;
use std::path::MAIN_SEPARATOR_STR;

use super::*;

#[test]
fn test_os_properties() {
    assert_eq!(os_name(), "Linux");
    assert!(!os_arch().is_empty());
    assert!(!os_version().is_empty());

    assert_eq!(property("os.name").unwrap(), os_name());
    assert_eq!(property("os.arch").unwrap(), os_arch());
    assert_eq!(property("os.version").unwrap(), os_version());
}

#[test]
fn test_separators() {
    assert_eq!(FILE_SEPARATOR, MAIN_SEPARATOR_STR);
    assert_eq!(property("file.separator").unwrap(), "/");
    assert_eq!(property("path.separator").unwrap(), ":");
    assert_eq!(property("line.separator").unwrap(), "\n");
}

#[test]
fn test_user_properties() {
    assert_eq!(user_dir().unwrap(), env::current_dir().unwrap());
    assert_eq!(
        property("user.dir").unwrap(),
        env::current_dir().unwrap().to_string_lossy(),
    );

    // Containers don't always have a password database entry or the fallback variables, so only
    // check that both lookups agree.
    match user_name() {
        Ok(name) => {
            assert!(!name.is_empty());
            assert_eq!(property("user.name").unwrap(), name);
        },
        Err(e) => assert!(e.is_unavailable(), "Only a missing user is acceptable, got: {e}"),
    }
    match user_home() {
        Ok(home) => assert!(home.is_absolute() || home.as_os_str().is_empty()),
        Err(e) => assert!(e.is_unavailable(), "Only a missing user is acceptable, got: {e}"),
    }
}

#[test]
fn test_paths() {
    assert!(!tmp_dir().as_os_str().is_empty());
    assert!(
        library_path().iter().all(|path| !path.as_os_str().is_empty()),
        "Empty entries should be left out."
    );
    assert!(property("library.path").is_ok());
}

#[test]
fn test_keys() {
    for prop in Property::ALL {
        assert_eq!(
            prop.key().parse::<Property>().unwrap(),
            prop,
            "Every key should parse back into its property."
        );
        assert_eq!(prop.to_string(), prop.key());
    }

    let error = property("java.home").unwrap_err();
    assert_eq!(
        error,
        PropertyError::UnknownKey(UnknownKeyError {
            key: "java.home".to_owned(),
        })
    );
    assert_eq!(error.to_string(), "unknown system property: \"java.home\"");
}
