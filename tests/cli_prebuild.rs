mod common;

use common::TestEnv;

#[test]
fn prebuild_without_data_dir_warns_and_succeeds() {
    let env = TestEnv::new();

    let result = env.run(&["prebuild"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Web assets will not be embedded"));
    assert!(!env.exists("include"));
}

#[test]
fn prebuild_embeds_assets_through_child_process() {
    let env = TestEnv::new();
    env.write_project_file("data/index.html", "<html></html>");
    env.write_project_file(
        "platformio.ini",
        "[env:seeed_xiao_esp32s3]\nframework = arduino\n",
    );

    let result = env.run(&["prebuild"]);

    assert!(result.success, "{}", result.combined_output());
    assert_generated!(env, "include/embedded_index.h");
    assert!(env
        .read_project_file("include/embedded_web_assets.h")
        .contains("PROGMEM"));
}

#[test]
fn prebuild_selects_idf_headers_from_framework() {
    let env = TestEnv::new();
    env.write_project_file("data/index.html", "<html></html>");
    env.write_project_file(
        "platformio.ini",
        "[env]\nframework = espidf\n\n[env:cam]\nboard = esp32s3\n",
    );

    let result = env.run_with_env(&["--json", "prebuild"], &[("PIOENV", "cam")]);

    assert!(result.success, "{}", result.combined_output());
    let master = env.read_project_file("include/embedded_web_assets.h");
    assert!(master.contains("struct EmbeddedFile"));
    assert!(!master.contains("PROGMEM"));

    let complete = result.events().last().cloned().unwrap();
    assert_eq!(complete["dialect"], "esp-idf");
}

#[test]
fn prebuild_passes_config_to_child() {
    let env = TestEnv::new();
    env.write_project_file("web/index.html", "<html></html>");
    env.write_project_file(
        "build/fwkit.toml",
        "[embed]\ndata_dir = \"web\"\ninclude_dir = \"gen\"\n",
    );

    let result = env.run(&["--config", "build/fwkit.toml", "prebuild"]);

    assert!(result.success, "{}", result.combined_output());
    assert_generated!(env, "gen/embedded_index.h");
}
