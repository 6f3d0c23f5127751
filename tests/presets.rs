use separator_sizing_toolbox::separator::presets;
use separator_sizing_toolbox::separator::sizing;

#[test]
fn find_preset_case_insensitive() {
    assert!(presets::find_preset("vert-test").is_some());
    assert!(presets::find_preset("VERT-TEST").is_some());
    assert!(presets::find_preset("no-such-preset").is_none());
}

#[test]
fn every_preset_sizes_without_error() {
    for p in presets::presets() {
        let res = sizing::size(&p.input)
            .unwrap_or_else(|e| panic!("preset {} failed: {e}", p.code));
        assert!(res.diameter_ft > 0.0, "preset {} diameter=0", p.code);
        assert!(res.length_ft > 0.0, "preset {} length=0", p.code);
        let ratio = res.length_ft / res.diameter_ft;
        assert!(
            (sizing::SLENDERNESS_MIN..=sizing::SLENDERNESS_MAX).contains(&ratio),
            "preset {} L/D={ratio}",
            p.code
        );
    }
}
