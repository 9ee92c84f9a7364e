use std::fs;

use chrono::NaiveDate;

use retail_synth::cli::GenerateArgs;

fn bare_args() -> GenerateArgs {
    GenerateArgs {
        config: None,
        catalog: None,
        count: None,
        seed: None,
        start_date: None,
        end_date: None,
        campaign_probability: None,
        stores: 45,
        force: false,
    }
}

#[test]
fn defaults_apply_when_nothing_is_passed() {
    let config = bare_args().session_config().expect("config");
    assert_eq!(config.count, 50_000);
    assert_eq!(config.seed, None);
    assert_eq!(config.campaigns.base_probability, 0.10);
}

#[test]
fn flags_override_the_defaults() {
    let mut args = bare_args();
    args.count = Some(1_000);
    args.seed = Some(42);
    args.campaign_probability = Some(0.25);
    args.start_date = NaiveDate::from_ymd_opt(2025, 3, 1);
    args.end_date = NaiveDate::from_ymd_opt(2025, 3, 31);

    let config = args.session_config().expect("config");
    assert_eq!(config.count, 1_000);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.campaigns.base_probability, 0.25);
    assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2025, 3, 1).expect("date"));
}

#[test]
fn flags_override_the_config_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("session.yaml");
    fs::write(
        &path,
        "count: 200\nstart_date: 2024-01-01\nend_date: 2024-06-30\nseed: 7\n",
    )
    .expect("write config");

    let mut args = bare_args();
    args.config = Some(path);
    args.count = Some(999);

    let config = args.session_config().expect("config");
    assert_eq!(config.count, 999);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2024, 6, 30).expect("date"));
}

#[test]
fn invalid_overrides_are_rejected() {
    let mut args = bare_args();
    args.campaign_probability = Some(1.5);
    args.session_config().expect_err("probability above 1 should fail");

    let mut args = bare_args();
    args.start_date = NaiveDate::from_ymd_opt(2025, 1, 1);
    args.end_date = NaiveDate::from_ymd_opt(2024, 1, 1);
    args.session_config().expect_err("inverted date range should fail");
}
