// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Controller tests
//!
//! Tests for the view registry and for how Model changes, rejections and
//! save outcomes are broadcast

use std::{fs, rc::Rc};
use tempfile::TempDir;

use super::support::{attach, build_view, new_log, recording_panes, sample_movies, Log};
use crate::core::{keys, Model, Value};
use crate::ui::{controller::ControllerError, view::ViewState, Controller};

/// Helper: Controller over the sample collection with one logged View
fn controller_with_view() -> (Rc<Controller>, Log) {
    let controller = Controller::new(Model::with_movies(sample_movies()));
    let log = new_log();
    let (view, _shell) = attach(&controller, "Movies", recording_panes("p", 1, &log));
    // The Controller's registry keeps the View alive
    drop(view);
    log.borrow_mut().clear();
    (controller, log)
}

/// Helper: Log entries that are not lifecycle calls
fn notifications(log: &Log) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|entry| !entry.ends_with(":initialize") && !entry.ends_with(":terminate"))
        .cloned()
        .collect()
}

#[test]
fn test_add_view_initializes_view() {
    let controller = Controller::new(Model::new());
    let log = new_log();

    let (view, _shell) = attach(&controller, "Movies", recording_panes("p", 2, &log));

    assert_eq!(controller.view_count(), 1);
    assert!(controller.has_view(view.id()));
    assert_eq!(view.state(), ViewState::Initialized);
    assert_eq!(*log.borrow(), vec!["p1:initialize", "p2:initialize"]);
}

#[test]
fn test_add_view_twice_is_rejected() {
    let controller = Controller::new(Model::new());
    let log = new_log();
    let (view, _shell) = attach(&controller, "Movies", recording_panes("p", 1, &log));

    let result = controller.add_view(view.clone());

    assert_eq!(result, Err(ControllerError::DuplicateView(view.id())));
    assert_eq!(controller.view_count(), 1, "Registry unchanged");
    assert_eq!(log.borrow().len(), 1, "View not initialised a second time");
}

#[test]
fn test_views_registered_in_order() {
    let controller = Controller::new(Model::new());
    let log = new_log();
    let (first, _s1) = attach(&controller, "One", recording_panes("a", 1, &log));
    let (second, _s2) = attach(&controller, "Two", recording_panes("b", 1, &log));

    assert_eq!(controller.view_ids(), vec![first.id(), second.id()]);
}

#[test]
fn test_remove_view_terminates_and_is_idempotent() {
    let controller = Controller::new(Model::new());
    let log = new_log();
    let (view, shell) = attach(&controller, "Movies", recording_panes("p", 1, &log));

    assert!(controller.remove_view(view.id()), "First removal succeeds");
    assert!(!controller.remove_view(view.id()), "Second removal is a no-op");

    assert_eq!(controller.view_count(), 0);
    assert_eq!(view.state(), ViewState::Terminated);
    assert_eq!(shell.disconnects.get(), 1, "Terminated exactly once");

    controller.set_property("filter", Value::from("x"));
    assert!(notifications(&log).is_empty(), "Removed Views receive nothing");
}

#[test]
fn test_remove_view_releases_view() {
    let controller = Controller::new(Model::new());
    let (view, _shell) = attach(&controller, "Movies", Vec::new());
    let id = view.id();
    let weak = Rc::downgrade(&view);
    drop(view);

    assert!(weak.upgrade().is_some(), "Registry holds the View");
    controller.remove_view(id);
    assert!(weak.upgrade().is_none(), "Removed View is released");
}

#[test]
fn test_window_close_removes_view() {
    let controller = Controller::new(Model::new());
    let log = new_log();
    let (view, shell) = attach(&controller, "Movies", recording_panes("p", 1, &log));

    shell.request_close();
    shell.request_close();

    assert_eq!(controller.view_count(), 0);
    assert_eq!(view.state(), ViewState::Terminated);
    assert_eq!(*log.borrow(), vec!["p1:initialize", "p1:terminate"]);
}

#[test]
fn test_select_broadcasts_field_changes() {
    let (controller, log) = controller_with_view();

    controller.set_property(keys::SELECTED, Value::Integer(0));

    assert_eq!(
        notifications(&log),
        vec![
            "p1:property selected=0<--1",
            "p1:property title=Alien<-",
            "p1:property year=1979<-0",
            "p1:property genre=Horror<-",
            "p1:property rating=8.5<-0.0",
        ]
    );
    assert_eq!(controller.get_property(keys::TITLE), Some(Value::from("Alien")));
}

#[test]
fn test_unchanged_value_is_not_broadcast() {
    let (controller, log) = controller_with_view();

    controller.set_property("filter", Value::from("x"));
    controller.set_property("filter", Value::from("x"));

    assert_eq!(notifications(&log), vec!["p1:property filter=x<-(none)"]);
}

#[test]
fn test_rejected_change_broadcasts_status() {
    let (controller, log) = controller_with_view();

    controller.set_property(keys::TITLE, Value::from("Nothing selected"));

    let seen = notifications(&log);
    assert_eq!(seen.len(), 1, "Only the status event is broadcast");
    assert!(seen[0].starts_with("p1:update status="), "Got {:?}", seen);
    assert_eq!(controller.get_property(keys::TITLE), Some(Value::from("")));
}

#[test]
fn test_try_set_property_reports_error() {
    let (controller, log) = controller_with_view();

    let result = controller.try_set_property(keys::SELECTED, Value::Integer(99));

    assert!(result.is_err());
    assert!(notifications(&log).is_empty(), "try_ variant broadcasts nothing on error");
}

#[test]
fn test_explicit_update_is_delivered_every_time() {
    let (controller, log) = controller_with_view();

    controller.update("status", Value::from("ready"));
    controller.update("status", Value::from("ready"));

    assert_eq!(
        notifications(&log),
        vec!["p1:update status=ready", "p1:update status=ready"]
    );
}

#[test]
fn test_open_file_broadcasts_collection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.csv");
    fs::write(&path, "title,year,genre,rating\nAlien,1979,Horror,8.5\n").unwrap();

    let controller = Controller::new(Model::new());
    let log = new_log();
    let (_view, shell) = attach(&controller, "Movies", recording_panes("p", 1, &log));
    log.borrow_mut().clear();

    shell.answer(Some(path.clone()));
    shell.activate(crate::ui::menu::MenuCommand::FileOpen);

    let seen = notifications(&log);
    assert_eq!(
        seen,
        vec![
            format!("p1:property file={}<-(none)", path.display()),
            "p1:property movies=1 movies<-0 movies".to_string(),
            format!("p1:update file={}", path.display()),
        ]
    );
    assert_eq!(controller.movies().len(), 1);
}

#[test]
fn test_open_missing_file_broadcasts_status() {
    let temp_dir = TempDir::new().unwrap();
    let (controller, log) = controller_with_view();

    controller.set_property(keys::FILE, Value::Path(temp_dir.path().join("missing.csv")));

    let seen = notifications(&log);
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("p1:update status="));
    assert_eq!(controller.movies().len(), 3, "Collection untouched");
}

#[test]
fn test_save_success_broadcasts_saved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");
    let (controller, log) = controller_with_view();

    controller.save(&path);

    assert_eq!(notifications(&log), vec![format!("p1:update saved={}", path.display())]);
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("title,year,genre,rating\n"));
    assert!(written.contains("Heat,1995,Crime,8.3"));
}

#[test]
fn test_save_failure_broadcasts_status() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("out.csv");
    let (controller, log) = controller_with_view();

    controller.save(&path);

    let seen = notifications(&log);
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("p1:update status=Save failed:"), "Got {:?}", seen);
    assert!(controller.try_save(&path).is_err());
}

#[test]
fn test_save_command_with_failing_destination_saves_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("out.csv");
    let controller = Controller::new(Model::with_movies(sample_movies()));
    let log = new_log();
    let (_view, shell) = attach(&controller, "Movies", recording_panes("p", 1, &log));
    log.borrow_mut().clear();

    shell.answer(Some(path));
    shell.activate(crate::ui::menu::MenuCommand::FileSave);

    let failures = notifications(&log)
        .into_iter()
        .filter(|entry| entry.contains("Save failed"))
        .count();
    assert_eq!(failures, 1, "One save attempt, one failure report");
}

#[test]
fn test_unregistered_view_is_not_notified() {
    let controller = Controller::new(Model::new());
    let log = new_log();
    let weak: std::rc::Weak<Controller> = Rc::downgrade(&controller);
    let (view, _shell) = build_view(weak, "Loose", recording_panes("p", 1, &log));
    view.initialize();
    log.borrow_mut().clear();

    controller.set_property("filter", Value::from("x"));

    assert!(log.borrow().is_empty());
}

#[test]
fn test_registered_views_do_not_keep_controller_alive() {
    let controller = Controller::new(Model::with_movies(sample_movies()));
    let log = new_log();

    // Panes reach the Controller the way the GTK panes do: through a Weak
    let weak: std::rc::Weak<Controller> = Rc::downgrade(&controller);
    let pane = super::support::RecordingPane::new("p1", &log).reacting(move |key, _| {
        if key == "refresh" {
            if let Some(controller) = weak.upgrade() {
                controller.update("status", Value::from("refreshed"));
            }
        }
    });
    let (_view, _shell) = attach(&controller, "Movies", vec![pane.boxed()]);

    let handle = Rc::downgrade(&controller);
    drop(controller);

    assert!(handle.upgrade().is_none(), "Controller released with a View still registered");
}
