//! End-to-end tests for the chromapick binary.

mod common;

use common::{
    assert_close, assert_failure_contains, assert_single_line, assert_success, fixtures, TestCli,
};
use fixtures::colors;
use pretty_assertions::assert_eq;

#[test]
fn test_status_screen_without_command() {
    let cli = TestCli::new();
    let output = cli.run(&[]);

    assert_success(&output);
    assert!(output.stdout.starts_with("Chromapick v"));
    assert!(output.stdout.contains("D50 / 2 degree"));
    assert!(output.stdout.contains("built-in defaults"));
}

#[test]
fn test_convert_text() {
    let cli = TestCli::new();
    let output = cli.run(&["convert", colors::RED]);

    assert_success(&output);
    let lines = output.lines();
    assert_eq!(lines[0], "hex    #ff0000");
    assert_eq!(lines[1], "rgb    1.0000 0.0000 0.0000");
    assert!(lines.iter().any(|l| l.starts_with("lab    54.29")), "{lines:?}");
    assert_eq!(*lines.last().unwrap(), "text   #000000");
}

#[test]
fn test_convert_json_defaults_to_d50() {
    let cli = TestCli::new();
    let json = cli.run(&["convert", colors::RED, "--json"]).json();

    assert_eq!(json["hex"], "#ff0000");
    assert_eq!(json["illuminant"], "D50");
    assert_eq!(json["observer"], "2");
    assert_close(json["lab"][0].as_f64().unwrap(), 54.29, 0.05);
    assert_close(json["lab"][1].as_f64().unwrap(), 80.81, 0.05);
    assert_close(json["lab"][2].as_f64().unwrap(), 69.89, 0.05);
}

#[test]
fn test_convert_with_d65_reference() {
    let cli = TestCli::new();
    let json = cli
        .run(&["--illuminant", "D65", "convert", colors::RED, "--json"])
        .json();

    assert_eq!(json["illuminant"], "D65");
    assert_close(json["lab"][0].as_f64().unwrap(), 53.24, 0.05);
    assert_close(json["lab"][1].as_f64().unwrap(), 80.09, 0.05);
    assert_close(json["lab"][2].as_f64().unwrap(), 67.20, 0.05);
}

#[test]
fn test_unknown_illuminant_falls_back_with_warning() {
    let cli = TestCli::new();
    let output = cli.run(&["--illuminant", "D93", "convert", colors::WHITE, "--json"]);

    assert_success(&output);
    assert_eq!(output.json()["illuminant"], "D50");
    assert!(output.stderr.contains("Falling back to D50"), "{}", output.stderr);
}

#[test]
fn test_convert_rejects_bad_color() {
    let cli = TestCli::new();
    let output = cli.run(&["convert", "nope"]);
    assert_failure_contains(&output, "Invalid color 'nope'");
}

#[test]
fn test_contrast() {
    let cli = TestCli::new();
    assert_single_line(&cli.run(&["contrast", colors::YELLOW]), colors::BLACK);
    assert_single_line(&cli.run(&["contrast", colors::NAVY]), colors::WHITE);

    let json = cli.run(&["contrast", colors::WHITE, "--json"]).json();
    assert_eq!(json["color"], colors::WHITE);
    assert_eq!(json["contrasting"], colors::BLACK);
}

#[test]
fn test_distance() {
    let cli = TestCli::new();
    assert_single_line(&cli.run(&["distance", colors::BLACK, colors::WHITE]), "1.732051");

    let json = cli
        .run(&["distance", colors::BLACK, colors::WHITE, "--metric", "lch", "--json"])
        .json();
    assert_eq!(json["metric"], "lch");
    assert_close(json["distance"].as_f64().unwrap(), 100.0, 0.01);
}

#[test]
fn test_mix() {
    let cli = TestCli::new();
    assert_single_line(&cli.run(&["mix", colors::RED, colors::BLUE]), "#bc00bc");
    assert_single_line(&cli.run(&["mix", colors::RED, colors::BLUE, "--ratio", "0"]), colors::RED);
    assert_single_line(&cli.run(&["mix", colors::RED, colors::BLUE, "-r", "1"]), colors::BLUE);
}

#[test]
fn test_palette_from_file() {
    let cli = TestCli::new();
    cli.write_file("pixels.rgb", fixtures::two_clusters());

    let output = cli.run(&["palette", "--input", "pixels.rgb"]);
    assert_success(&output);
    assert_eq!(
        output.lines(),
        vec!["#f01414\tpixels.rgb #0", "#1414f0\tpixels.rgb #1"]
    );
}

#[test]
fn test_palette_json_with_name() {
    let cli = TestCli::new();
    cli.write_file("pixels.rgb", fixtures::two_clusters());

    let json = cli
        .run(&["palette", "-i", "pixels.rgb", "--name", "sample", "--json"])
        .json();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "sample #0");
    assert_eq!(entries[1]["hex"], "#1414f0");
}

#[test]
fn test_palette_respects_color_limit() {
    let cli = TestCli::new();
    cli.write_file("gradient.rgb", fixtures::gradient());

    for limit in ["1", "3", "10"] {
        let output = cli.run(&["palette", "-i", "gradient.rgb", "--colors", limit]);
        assert_success(&output);
        let count = output.lines().len();
        assert!(count >= 1 && count <= limit.parse().unwrap(), "{limit}: {count}");
    }
}

#[test]
fn test_palette_rgba_input() {
    let cli = TestCli::new();
    cli.write_file("pixels.rgba", fixtures::with_alpha(&fixtures::two_clusters()));

    let output = cli.run(&["palette", "-i", "pixels.rgba", "--channels", "4"]);
    assert_success(&output);
    assert_eq!(output.lines().len(), 2);
}

#[test]
fn test_palette_partial_pixel_fails() {
    let cli = TestCli::new();
    cli.write_file("broken.rgb", [1u8, 2, 3, 4, 5]);

    let output = cli.run(&["palette", "-i", "broken.rgb"]);
    assert_failure_contains(&output, "Pixel stream ended mid-pixel");
}

#[test]
fn test_palette_missing_file_fails() {
    let cli = TestCli::new();
    let output = cli.run(&["palette", "-i", "missing.rgb"]);
    assert_failure_contains(&output, "Failed to open missing.rgb");
}

#[test]
fn test_palette_bad_channel_count_fails() {
    let cli = TestCli::new();
    cli.write_file("pixels.rgb", fixtures::two_clusters());
    let output = cli.run(&["palette", "-i", "pixels.rgb", "--channels", "2"]);
    assert_failure_contains(&output, "Unsupported channel count: 2");
}

#[test]
fn test_config_file_sets_defaults() {
    let cli = TestCli::new();
    cli.write_file(
        "chromapick.yaml",
        "illuminant: D65\noutput: json\npalette:\n  colors: 1\n  name: cfg\n",
    );
    cli.write_file("pixels.rgb", fixtures::two_clusters());

    let json = cli
        .run(&["--config", "chromapick.yaml", "convert", colors::RED])
        .json();
    assert_eq!(json["illuminant"], "D65");

    let json = cli
        .run(&["--config", "chromapick.yaml", "palette", "-i", "pixels.rgb"])
        .json();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "cfg #0");
}

#[test]
fn test_config_from_environment() {
    let cli = TestCli::new();
    let path = cli.write_file("env.yaml", "observer: \"10\"\n");

    let output = cli.run_with_env(
        &["convert", colors::RED, "--json"],
        &[("CHROMAPICK_CONFIG", path.to_str().unwrap())],
    );
    assert_success(&output);
    assert_eq!(output.json()["observer"], "10");
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let cli = TestCli::new();
    cli.write_file("bad.yaml", "palette: [1, 2]\n");

    let output = cli.run(&["--config", "bad.yaml", "convert", colors::RED, "--json"]);
    assert_success(&output);
    assert_eq!(output.json()["illuminant"], "D50");
    assert!(output.stderr.contains("Failed to load config"), "{}", output.stderr);
}
