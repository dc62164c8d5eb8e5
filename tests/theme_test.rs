//! Tests for the theme registry through the styling context

mod common;

use cb9_style::palette::{BLUE, DIM, GREEN, RED};
use cb9_style::theme::{DEFAULT, FOREST, MONO, OCEAN, SUNSET};
use cb9_style::{Error, Role, Theme};
use common::{piped_styler, tty_styler};

// ===================
// Lookup tests
// ===================

#[test]
fn test_success_after_apply_ocean() {
    let styler = piped_styler();
    styler.apply_theme(OCEAN);
    let success = styler.theme_color("success").unwrap();
    assert_eq!(success, OCEAN.success);
    assert_ne!(success, FOREST.success);
}

#[test]
fn test_bogus_role_fails_for_every_theme() {
    let styler = piped_styler();
    for theme in [DEFAULT, OCEAN, FOREST, SUNSET, MONO] {
        styler.apply_theme(theme);
        assert!(matches!(
            styler.theme_color("bogus"),
            Err(Error::UnknownRole(name)) if name == "bogus"
        ));
    }
}

#[test]
fn test_every_role_resolves_for_every_theme() {
    let styler = piped_styler();
    for theme in [DEFAULT, OCEAN, FOREST, SUNSET, MONO] {
        styler.apply_theme(theme.clone());
        for role in Role::ALL {
            assert_eq!(
                &styler.theme_color(role.as_str()).unwrap(),
                theme.get(role)
            );
        }
    }
}

// ===================
// Listing tests
// ===================

#[test]
fn test_list_themes_stable_regardless_of_active() {
    let styler = piped_styler();
    let expected = ["default", "ocean", "forest", "sunset", "mono"];
    assert_eq!(styler.list_themes(), expected);

    for name in expected {
        styler.themes().apply_preset(name).unwrap();
        assert_eq!(styler.list_themes(), expected);
    }
}

// ===================
// Snapshot and replacement tests
// ===================

#[test]
fn test_current_theme_snapshot_does_not_leak_mutations() {
    let styler = piped_styler();
    let mut snapshot = styler.current_theme();
    snapshot.set(Role::Success, RED);
    snapshot.name = "changed".into();

    assert_eq!(styler.current_theme(), DEFAULT);
}

#[test]
fn test_apply_replaces_wholesale() {
    let styler = piped_styler();
    let custom = Theme::from_roles(
        "custom",
        Role::ALL.into_iter().map(|role| (role, BLUE)),
    )
    .unwrap();
    styler.apply_theme(custom.clone());

    let current = styler.current_theme();
    assert_eq!(current, custom);
    assert_eq!(current.muted, BLUE);
}

#[test]
fn test_incomplete_theme_fails_at_construction() {
    let err = Theme::from_named("half", [("primary", GREEN), ("muted", DIM)]).unwrap_err();
    assert!(matches!(
        err,
        Error::IncompleteTheme { role: Role::Secondary, .. }
    ));
    assert_eq!(err.to_string(), "Theme 'half' is missing role: secondary");
}

#[test]
fn test_paint_follows_active_theme() {
    let styler = tty_styler(80);
    assert_eq!(styler.paint("ok", Role::Success), "\x1b[32mok\x1b[0m");
    styler.apply_theme(FOREST);
    assert_eq!(styler.paint("ok", Role::Success), "\x1b[92mok\x1b[0m");
}

#[test]
fn test_independent_contexts_do_not_share_state() {
    let a = piped_styler();
    let b = piped_styler();
    a.apply_theme(SUNSET);
    a.set_colors_enabled(true);

    assert_eq!(b.current_theme(), DEFAULT);
    assert!(!b.colors_enabled());
}
