use std::fs;

use tempfile::tempdir;

use topograph::topology::Preset;
use topograph_cli::{Args, run};

#[test]
fn e2e_smoke_test_all_presets() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed_presets = Vec::new();

    for preset in Preset::all() {
        let args = Args {
            preset: preset.to_string(),
            out_dir: temp_dir.path().to_string_lossy().to_string(),
            // The dot format needs no Graphviz installation
            format: Some("dot".to_string()),
            config: None,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_presets.push((preset, e));
        }
    }

    if !failed_presets.is_empty() {
        eprintln!("\nPresets that failed:");
        for (preset, err) in &failed_presets {
            eprintln!("  - {preset}: {err}");
        }
        panic!("{} preset(s) failed unexpectedly", failed_presets.len());
    }

    // Each preset writes a file named from its diagram title
    for preset in Preset::all() {
        let diagram = preset.build().expect("Preset model should be valid");
        let output_path = temp_dir
            .path()
            .join(format!("{}.dot", diagram.output_stem()));

        assert!(
            output_path.exists(),
            "Expected output file {} for preset {preset}",
            output_path.display()
        );

        let content = fs::read_to_string(&output_path).expect("Failed to read output file");
        assert!(
            content.contains("digraph"),
            "Output for preset {preset} is not a DOT graph"
        );
    }

    println!("✅ All {} presets rendered", Preset::all().len());
}

#[test]
fn e2e_unknown_preset_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        preset: "aws-quantum-mesh".to_string(),
        out_dir: temp_dir.path().to_string_lossy().to_string(),
        format: Some("dot".to_string()),
        config: None,
        log_level: "off".to_string(),
    };

    let err = run(&args).expect_err("Unknown preset should be rejected");
    assert!(err.to_string().contains("unknown preset"));
}

#[test]
fn e2e_unknown_format_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        preset: "aws-architecture".to_string(),
        out_dir: temp_dir.path().to_string_lossy().to_string(),
        format: Some("bmp".to_string()),
        config: None,
        log_level: "off".to_string(),
    };

    let err = run(&args).expect_err("Unknown format should be rejected");
    assert!(err.to_string().contains("unknown output format"));
}

#[test]
fn e2e_config_file_selects_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[output]\nformat = \"dot\"\n").expect("Failed to write config");

    let args = Args {
        preset: "aws-cluster".to_string(),
        out_dir: temp_dir.path().to_string_lossy().to_string(),
        format: None,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("Preset should render with config-selected format");

    // The clustered preset shares its title with the flat one
    let output_path = temp_dir.path().join("aws_architecture.dot");
    assert!(output_path.exists());
}
