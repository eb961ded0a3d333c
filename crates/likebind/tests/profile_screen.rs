#![forbid(unsafe_code)]

//! Integration tests: the profile screen driven through its like button.

use std::cell::RefCell;
use std::rc::Rc;

use likebind::binder::{IC_PERSON, IC_WHATSHOT, scaled_progress};
use likebind::config::ProfileConfig;
use likebind::layout::ids;
use likebind::{AppConfig, AppError, BindStyle, Binder, Popularity, ProfileActivity, ProfileViewModel};
use likebind_runtime::ViewModelStore;
use likebind_style::{Palette, Rgba};
use likebind_widgets::{Button, ImageView, Layout, ProgressBar, TextView, ViewError, ViewNode, ViewRoot};
use proptest::prelude::*;

fn config(likes: u32, max: u32) -> AppConfig {
    AppConfig {
        profile: ProfileConfig {
            likes,
            max,
            ..ProfileConfig::default()
        },
        ..AppConfig::default()
    }
}

fn text(view: &ViewRoot, id: likebind_widgets::WidgetId) -> String {
    view.find::<TextView>(id).unwrap().text().to_owned()
}

fn image_tint(view: &ViewRoot) -> Option<Rgba> {
    view.find::<ImageView>(ids::IMAGE)
        .unwrap()
        .image_tint_list()
        .map(|t| t.default_color())
}

#[test]
fn initial_pass_renders_defaults() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();
    let view = screen.view();

    assert_eq!(text(&view, ids::NAME), "Ada");
    assert_eq!(text(&view, ids::LAST_NAME), "Lovelace");
    assert_eq!(text(&view, ids::LIKES), "0");
    assert_eq!(
        view.find::<ImageView>(ids::IMAGE).unwrap().drawable(),
        Some(IC_PERSON)
    );
    assert_eq!(image_tint(&view), Some(Rgba::BLACK));

    let bar = view.find::<ProgressBar>(ids::PROGRESS_BAR).unwrap();
    assert_eq!(bar.progress(), 0);
    assert!(
        !view
            .find::<ViewNode>(ids::PROGRESS_BAR)
            .unwrap()
            .visibility()
            .is_visible()
    );
    assert_eq!(screen.binder().render_passes(), 1);
}

#[test]
fn like_tap_increments_and_renders_once() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();

    assert!(screen.like().unwrap());
    assert_eq!(screen.view_model().likes(), 1);
    assert_eq!(screen.binder().render_passes(), 2);

    let view = screen.view();
    assert_eq!(text(&view, ids::LIKES), "1");
    assert_eq!(
        view.find::<ProgressBar>(ids::PROGRESS_BAR).unwrap().progress(),
        20
    );
    assert!(
        view.find::<ViewNode>(ids::PROGRESS_BAR)
            .unwrap()
            .visibility()
            .is_visible()
    );
}

#[test]
fn three_likes_out_of_five() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &config(3, 5)).unwrap();
    let view = screen.view();
    let bar = view.find::<ProgressBar>(ids::PROGRESS_BAR).unwrap();

    assert_eq!(bar.progress(), 3);
    assert_eq!(bar.max(), 5);
    assert!(
        view.find::<ViewNode>(ids::PROGRESS_BAR)
            .unwrap()
            .visibility()
            .is_visible()
    );
}

#[test]
fn tiers_change_icon_and_tint() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &config(4, 100)).unwrap();
    let palette = Palette::default();

    screen.like().unwrap();
    assert_eq!(screen.view_model().popularity(), Popularity::Popular);
    {
        let view = screen.view();
        assert_eq!(
            view.find::<ImageView>(ids::IMAGE).unwrap().drawable(),
            Some(IC_WHATSHOT)
        );
        assert_eq!(image_tint(&view), Some(palette.popular));
        assert_eq!(
            view.find::<ProgressBar>(ids::PROGRESS_BAR)
                .unwrap()
                .progress_tint_list()
                .map(|t| t.default_color()),
            Some(palette.popular)
        );
    }

    for _ in 0..5 {
        screen.like().unwrap();
    }
    assert_eq!(screen.view_model().popularity(), Popularity::Star);
    let view = screen.view();
    assert_eq!(
        view.find::<ImageView>(ids::IMAGE).unwrap().drawable(),
        Some(IC_WHATSHOT)
    );
    assert_eq!(image_tint(&view), Some(palette.star));
}

#[test]
fn progress_tint_skipped_without_device_support() {
    let mut config = config(7, 100);
    config.device.progress_tint = false;
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &config).unwrap();

    let view = screen.view();
    let bar = view.find::<ProgressBar>(ids::PROGRESS_BAR).unwrap();
    assert_eq!(bar.progress_tint_list(), None);
    assert_eq!(image_tint(&view), Some(Palette::default().popular));
}

#[test]
fn name_edit_renders_once_and_equal_edit_not_at_all() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();

    screen.view_model().set_first_name("Ada");
    assert_eq!(screen.binder().render_passes(), 1);

    screen.view_model().set_first_name("Augusta");
    assert_eq!(screen.binder().render_passes(), 2);
    assert_eq!(text(&screen.view(), ids::NAME), "Augusta");
}

#[test]
fn tap_on_non_button_is_an_error() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();
    let err = screen.tap(ids::NAME).unwrap_err();
    assert!(matches!(
        err,
        AppError::View(ViewError::WrongKind { .. })
    ));
    assert_eq!(screen.binder().render_passes(), 1);
}

#[test]
fn recreated_screen_keeps_view_model() {
    let store = ViewModelStore::new();
    let config = AppConfig::default();
    let first = ProfileActivity::on_create(&store, &config).unwrap();
    first.like().unwrap();
    first.like().unwrap();
    let view_model = Rc::clone(first.view_model());
    drop(first);

    let second = ProfileActivity::on_create(&store, &config).unwrap();
    assert!(Rc::ptr_eq(&view_model, second.view_model()));
    assert_eq!(text(&second.view(), ids::LIKES), "2");

    second.like().unwrap();
    assert_eq!(second.binder().render_passes(), 2);
    assert_eq!(view_model.likes(), 3);
}

#[test]
fn dropped_binder_stops_rendering() {
    let vm = Rc::new(ProfileViewModel::new(
        &ProfileConfig::default(),
        Default::default(),
    ));
    let view = Rc::new(RefCell::new(
        likebind::layout::profile(100).inflate().unwrap(),
    ));
    let binder = Binder::new(Rc::clone(&vm), Rc::clone(&view), BindStyle::default()).unwrap();
    assert!(binder.is_listening());
    drop(binder);

    vm.on_like();
    assert_eq!(text(&view.borrow(), ids::LIKES), "0");
}

#[test]
fn binder_rejects_layout_missing_widgets() {
    let vm = Rc::new(ProfileViewModel::new(
        &ProfileConfig::default(),
        Default::default(),
    ));
    let partial = Layout::new("partial")
        .text(ids::NAME)
        .button(ids::LIKE_BUTTON, "Like")
        .inflate()
        .unwrap();
    let view = Rc::new(RefCell::new(partial));

    let err = Binder::new(Rc::clone(&vm), Rc::clone(&view), BindStyle::default()).unwrap_err();
    assert_eq!(
        err,
        ViewError::MissingWidget {
            id: ids::LAST_NAME
        }
    );
    assert_eq!(text(&view.borrow(), ids::NAME), "");
    assert!(
        !view
            .borrow()
            .find::<Button>(ids::LIKE_BUTTON)
            .unwrap()
            .has_on_click_listener()
    );
    assert_eq!(vm.changed().revision(), 0);
}

#[test]
fn mutation_while_view_is_held_is_reported_not_panicking() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();
    {
        let _held = screen.view();
        screen.view_model().on_like();
    }
    assert_eq!(screen.view_model().likes(), 1);
    assert_eq!(screen.binder().render_passes(), 1);
    assert_eq!(screen.binder().take_last_error(), Some(ViewError::ViewBusy));
    assert_eq!(text(&screen.view(), ids::LIKES), "0");

    assert_eq!(screen.binder().render(), Ok(7));
    assert_eq!(text(&screen.view(), ids::LIKES), "1");
}

#[test]
fn tap_ignores_error_from_earlier_notification() {
    let store = ViewModelStore::new();
    let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();
    {
        let _held = screen.view();
        screen.view_model().set_first_name("Augusta");
    }

    assert!(screen.like().unwrap());
    assert_eq!(screen.binder().take_last_error(), None);
    assert_eq!(text(&screen.view(), ids::NAME), "Augusta");
    assert_eq!(text(&screen.view(), ids::LIKES), "1");
}

proptest! {
    #[test]
    fn progress_formula_holds(
        (max, likes) in (1u32..500).prop_flat_map(|max| (Just(max), 0..=max * 10))
    ) {
        let expected = (u64::from(likes) * u64::from(max) / 5).min(u64::from(max)) as u32;
        prop_assert_eq!(scaled_progress(likes, max), expected);

        let store = ViewModelStore::new();
        let screen = ProfileActivity::on_create(&store, &config(likes, max)).unwrap();
        let view = screen.view();
        prop_assert_eq!(view.find::<ProgressBar>(ids::PROGRESS_BAR).unwrap().progress(), expected);
        prop_assert_eq!(
            view.find::<ViewNode>(ids::PROGRESS_BAR).unwrap().visibility().is_visible(),
            likes > 0
        );
    }

    #[test]
    fn popularity_is_a_function_of_likes(likes in 0u32..100) {
        let store = ViewModelStore::new();
        let a = ProfileActivity::on_create(&store, &config(likes, 100)).unwrap();
        let other_store = ViewModelStore::new();
        let b = ProfileActivity::on_create(&other_store, &config(likes, 100)).unwrap();
        prop_assert_eq!(a.view_model().popularity(), b.view_model().popularity());
        prop_assert_eq!(a.view().to_string(), b.view().to_string());
    }

    #[test]
    fn each_like_is_one_pass(taps in 0u32..20) {
        let store = ViewModelStore::new();
        let screen = ProfileActivity::on_create(&store, &AppConfig::default()).unwrap();
        for _ in 0..taps {
            screen.like().unwrap();
        }
        prop_assert_eq!(screen.view_model().likes(), taps);
        prop_assert_eq!(screen.binder().render_passes(), 1 + u64::from(taps));
    }

    #[test]
    fn explicit_render_is_idempotent(likes in 0u32..50) {
        let store = ViewModelStore::new();
        let screen = ProfileActivity::on_create(&store, &config(likes, 100)).unwrap();
        let before = screen.view().to_string();
        screen.binder().render().unwrap();
        prop_assert_eq!(before, screen.view().to_string());
    }
}
