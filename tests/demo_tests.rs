//! The bundled demo project must stay loadable

use std::fs;
use std::path::PathBuf;

use picoconf::commands;
use picoconf::core::{ArtifactPaths, OverrideStatus, PathOverrides, SchemaSession, TomlSchemaEngine};
use tempfile::TempDir;

fn demo_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/pico-rtos")
}

fn copy_demo() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(demo_dir().join("Kconfig.toml"), dir.path().join("Kconfig.toml")).unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::copy(
        demo_dir().join("config/defconfig"),
        dir.path().join("config/defconfig"),
    )
    .unwrap();
    dir
}

#[test]
fn test_demo_defconfig_applies_cleanly() {
    let paths = ArtifactPaths::resolve(&demo_dir(), &PathOverrides::default());
    let mut session = SchemaSession::load(TomlSchemaEngine::new(), &paths.schema).unwrap();

    let defconfig = paths.find_defconfig().expect("demo ships config/defconfig");
    match session.apply_override(&defconfig).unwrap() {
        OverrideStatus::Applied { skipped, applied, .. } => {
            assert!(skipped.is_empty(), "{:?}", skipped);
            assert_eq!(applied, 3);
        }
        other => panic!("unexpected status: {:?}", other),
    }

    let config = session.symbols();
    assert_eq!(config.get("TICK_RATE_HZ").unwrap().value, "1000");
    assert_eq!(config.get("SPI_DRIVER").unwrap().value, "m");
}

#[test]
fn test_demo_defconfig_generates_artifacts() {
    let dir = copy_demo();
    let paths = ArtifactPaths::resolve(dir.path(), &PathOverrides::default());

    commands::defconfig::run(&paths, TomlSchemaEngine::new, None, false).unwrap();

    let header = fs::read_to_string(&paths.header).unwrap();
    assert!(header.contains("#define CONFIG_BUILD_EXAMPLES 1\n"));
    assert!(header.contains("#define CONFIG_SPI_DRIVER_MODULE 1\n"));
    assert!(header.contains("#define CONFIG_HEAP_BASE 0x20010000\n"));
    assert!(header.contains("#define CONFIG_DEVICE_NAME \"pico\"\n"));

    let cmake = fs::read_to_string(&paths.build_vars).unwrap();
    assert!(cmake.contains("set(CONFIG_ENABLE_LOGGING ON)\n"));
    assert!(cmake.contains("set(CONFIG_SPI_DRIVER OFF)\n"));
}
