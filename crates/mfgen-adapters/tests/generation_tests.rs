//! End-to-end generation tests over the in-memory filesystem.
//!
//! These exercise the full pipeline: validated configuration, plan, resolver
//! contexts, catalog rendering and filesystem writes.

use std::path::{Path, PathBuf};

use mfgen_adapters::{MemoryFilesystem, SimpleRenderer};
use mfgen_core::{
    application::{ApplicationError, GenerateService, ports::Filesystem},
    domain::{ConfigModel, RawConfig, RawMicrofrontend},
    error::GenError,
};

fn shop_config() -> ConfigModel {
    ConfigModel::from_raw(RawConfig {
        app_name: "shop".into(),
        host_port: 3000,
        microfrontends: vec![
            RawMicrofrontend {
                name: "cart".into(),
                port: 3001,
            },
            RawMicrofrontend {
                name: "catalog".into(),
                port: 3002,
            },
        ],
    })
    .unwrap()
}

fn service(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(Box::new(SimpleRenderer::new()), Box::new(fs.clone()))
}

#[test]
fn generation_writes_exactly_the_returned_paths() {
    let fs = MemoryFilesystem::new();
    let written = service(&fs).generate(&shop_config(), "out").unwrap();

    let mut expected = written.clone();
    expected.sort();
    assert_eq!(fs.list_files(), expected);
    assert!(!written.is_empty());
}

#[test]
fn generated_tree_covers_host_and_every_microfrontend() {
    let fs = MemoryFilesystem::new();
    service(&fs).generate(&shop_config(), "out").unwrap();

    for path in [
        "out/shop/package.json",
        "out/shop/webpack.config.js",
        "out/shop/tsconfig.json",
        "out/shop/public/index.html",
        "out/shop/src/index.tsx",
        "out/shop/src/declarations.d.ts",
        "out/shop/src/styles/main.scss",
        "out/shop/cart/package.json",
        "out/shop/cart/webpack.config.js",
        "out/shop/cart/tsconfig.json",
        "out/shop/cart/public/index.html",
        "out/shop/cart/src/App.tsx",
        "out/shop/cart/src/bootstrap.tsx",
        "out/shop/cart/src/index.tsx",
        "out/shop/cart/src/styles/main.scss",
        "out/shop/catalog/webpack.config.js",
    ] {
        assert!(
            fs.read_file(Path::new(path)).is_some(),
            "missing generated file: {path}"
        );
    }
}

#[test]
fn host_remote_entries_match_microfrontend_dev_server_ports() {
    let fs = MemoryFilesystem::new();
    service(&fs).generate(&shop_config(), "out").unwrap();

    let host = fs
        .read_file(Path::new("out/shop/webpack.config.js"))
        .unwrap();
    assert!(host.contains("'cart': 'cart@http://localhost:3001/remoteEntry.js',"));
    assert!(host.contains("'catalog': 'catalog@http://localhost:3002/remoteEntry.js',"));
    assert!(host.contains("port: 3000"));

    let cart = fs
        .read_file(Path::new("out/shop/cart/webpack.config.js"))
        .unwrap();
    assert!(cart.contains("port: 3001"));
    assert!(cart.contains("name: 'cart'"));
    assert!(cart.contains("filename: 'remoteEntry.js'"));
    assert!(cart.contains("'./App': './src/App'"));

    let catalog_cfg = fs
        .read_file(Path::new("out/shop/catalog/webpack.config.js"))
        .unwrap();
    assert!(catalog_cfg.contains("port: 3002"));
}

#[test]
fn host_entry_imports_and_mounts_every_remote() {
    let fs = MemoryFilesystem::new();
    service(&fs).generate(&shop_config(), "out").unwrap();

    let entry = fs.read_file(Path::new("out/shop/src/index.tsx")).unwrap();
    assert!(entry.contains("const Cart = lazy(() => import('cart/App'));"));
    assert!(entry.contains("const Catalog = lazy(() => import('catalog/App'));"));
    assert!(entry.contains("<Cart />"));
    assert!(entry.contains("<Catalog />"));

    let declarations = fs
        .read_file(Path::new("out/shop/src/declarations.d.ts"))
        .unwrap();
    assert!(declarations.contains("declare module 'cart/App';"));
    assert!(declarations.contains("declare module 'catalog/App';"));
}

#[test]
fn host_manifest_is_valid_json_with_start_all() {
    let fs = MemoryFilesystem::new();
    service(&fs).generate(&shop_config(), "out").unwrap();

    let manifest = fs.read_file(Path::new("out/shop/package.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["name"], "shop");

    let start_all = json["scripts"]["start:all"].as_str().unwrap();
    assert!(start_all.contains("\"npm start --prefix cart\""));
    assert!(start_all.contains("\"npm start --prefix catalog\""));
}

#[test]
fn microfrontend_manifest_names_the_unit() {
    let fs = MemoryFilesystem::new();
    service(&fs).generate(&shop_config(), "out").unwrap();

    let manifest = fs
        .read_file(Path::new("out/shop/cart/package.json"))
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["name"], "cart");
}

#[test]
fn no_unresolved_placeholders_survive_generation() {
    let fs = MemoryFilesystem::new();
    service(&fs).generate(&shop_config(), "out").unwrap();

    for path in fs.list_files() {
        let content = fs.read_file(&path).unwrap();
        assert!(
            !content.contains("{{"),
            "unresolved placeholder in {}",
            path.display()
        );
    }
}

#[test]
fn identical_configurations_generate_byte_identical_trees() {
    let fs_a = MemoryFilesystem::new();
    let fs_b = MemoryFilesystem::new();
    service(&fs_a).generate(&shop_config(), "out").unwrap();
    service(&fs_b).generate(&shop_config(), "out").unwrap();

    assert_eq!(fs_a.list_files(), fs_b.list_files());
    for path in fs_a.list_files() {
        assert_eq!(fs_a.read_file(&path), fs_b.read_file(&path));
    }
}

#[test]
fn host_only_configuration_generates_without_remotes() {
    let config = ConfigModel::from_raw(RawConfig {
        app_name: "solo".into(),
        host_port: 4000,
        microfrontends: vec![],
    })
    .unwrap();

    let fs = MemoryFilesystem::new();
    service(&fs).generate(&config, "out").unwrap();

    let host = fs
        .read_file(Path::new("out/solo/webpack.config.js"))
        .unwrap();
    assert!(host.contains("port: 4000"));
    assert!(!host.contains("remoteEntry.js"));
}

#[test]
fn populated_target_directory_is_rejected_before_any_write() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("out/shop")).unwrap();
    fs.write_file(Path::new("out/shop/keep.txt"), "precious")
        .unwrap();

    let err = service(&fs).generate(&shop_config(), "out").unwrap_err();
    assert!(matches!(
        err,
        GenError::Application(ApplicationError::ProjectExists { .. })
    ));
    // Only the pre-existing file remains.
    assert_eq!(fs.list_files(), vec![PathBuf::from("out/shop/keep.txt")]);
}

#[test]
fn empty_target_directory_is_accepted() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("out/shop")).unwrap();

    assert!(service(&fs).generate(&shop_config(), "out").is_ok());
}

#[test]
fn write_failure_names_the_failing_path_and_leaves_partial_tree() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("out/shop/cart/package.json");

    let err = service(&fs).generate(&shop_config(), "out").unwrap_err();
    assert!(err.to_string().contains("cart/package.json"));

    // Host files written before the failure stay in place.
    assert!(fs.read_file(Path::new("out/shop/package.json")).is_some());
    // Nothing past the failing target was written.
    assert!(
        fs.read_file(Path::new("out/shop/catalog/package.json"))
            .is_none()
    );
}
