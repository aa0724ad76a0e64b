use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Unknown names get the info styling.
    #[cfg(test)]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Info => "#3b82f6",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// Anything a component can report a status message to.
pub trait NotificationSink {
    fn notify(&mut self, message: String, severity: Severity);
}

/// Holds the single visible notification. Showing a new one replaces the
/// old one, and dismissal only removes the notification it was issued for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
            created_at: Utc::now(),
        });
        id
    }

    /// Returns false when `id` is no longer the visible notification.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&mut self, message: String, severity: Severity) {
        self.show(message, severity);
    }
}

pub enum NotificationAction {
    Show { message: String, severity: Severity },
    Dismiss(u64),
}

impl Reducible for NotificationCenter {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Show { message, severity } => {
                let id = next.show(message, severity);
                debug!("Showing {} notification {}", severity.name(), id);
            }
            NotificationAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Cloneable handle components use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<NotificationAction>);

impl Notifier {
    pub fn new(dispatch: Callback<NotificationAction>) -> Self {
        Self(dispatch)
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.0.emit(NotificationAction::Show { message: message.into(), severity });
    }
}

impl NotificationSink for Notifier {
    fn notify(&mut self, message: String, severity: Severity) {
        self.show(message, severity);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let id = props.notification.as_ref().map(|n| n.id);

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let timeout = id.map(|id| {
                    Timeout::new(config::NOTIFICATION_TIMEOUT_MS, move || on_dismiss.emit(id))
                });
                move || drop(timeout)
            },
            id,
        );
    }

    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = notification.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let severity = notification.severity;
    let lines = notification.message.split('\n').collect::<Vec<_>>();
    let last = lines.len().saturating_sub(1);

    html! {
        <div
            key={notification.id.to_string()}
            title={notification.created_at.format("%H:%M:%S").to_string()}
            class={classes!("notification", format!("notification-{}", severity.name()))}
            style={format!("position: fixed; top: 100px; right: 20px; z-index: 10000; background: {}; color: white; padding: 1rem 1.5rem; border-radius: 0.75rem; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); animation: slideIn 0.3s ease-out; max-width: 400px;", severity.color())}
        >
            <style>
                {r#"
                    @keyframes slideIn {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .notification-message {
                        flex: 1;
                        line-height: 1.4;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.5rem;
                        cursor: pointer;
                        padding: 0;
                        margin-left: 0.5rem;
                    }
                "#}
            </style>
            <div class="notification-content">
                <span class="notification-icon">{severity.icon()}</span>
                <span class="notification-message">
                    { for lines.into_iter().enumerate().map(|(i, line)| html! {
                        <>
                            {line}
                            if i < last { <br/> }
                        </>
                    }) }
                </span>
                <button class="notification-close" onclick={close}>{"×"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn rapid_shows_leave_only_the_latest() {
        let mut center = NotificationCenter::default();
        let mut last = 0;
        for i in 0..10 {
            last = center.show(format!("message {}", i), Severity::Info);
        }

        let current = center.current().expect("one notification visible");
        assert_eq!(current.id, last);
        assert_eq!(current.message, "message 9");
    }

    #[test]
    fn stale_dismiss_does_not_remove_newer_notification() {
        let mut center = NotificationCenter::default();
        let first = center.show("first", Severity::Error);
        let second = center.show("second", Severity::Success);

        assert!(!center.dismiss(first));
        assert_eq!(center.current().map(|n| n.id), Some(second));

        assert!(center.dismiss(second));
        assert!(center.current().is_none());
        // Timer firing after a manual close.
        assert!(!center.dismiss(second));
    }

    #[test]
    fn reducer_replaces_and_dismisses() {
        let center = Rc::new(NotificationCenter::default());
        let center = center.reduce(NotificationAction::Show {
            message: "a".to_string(),
            severity: Severity::Info,
        });
        let center = center.reduce(NotificationAction::Show {
            message: "b".to_string(),
            severity: Severity::Error,
        });
        let id = center.current().map(|n| n.id).unwrap();

        let unchanged = center.clone().reduce(NotificationAction::Dismiss(id - 1));
        assert!(Rc::ptr_eq(&center, &unchanged));

        let cleared = center.reduce(NotificationAction::Dismiss(id));
        assert!(cleared.current().is_none());
    }

    #[rstest]
    #[case("success", Severity::Success, "#10b981", "✅")]
    #[case("error", Severity::Error, "#ef4444", "❌")]
    #[case("info", Severity::Info, "#3b82f6", "ℹ️")]
    #[case("warning", Severity::Info, "#3b82f6", "ℹ️")]
    fn severity_styling(
        #[case] name: &str,
        #[case] severity: Severity,
        #[case] color: &str,
        #[case] icon: &str,
    ) {
        let parsed = Severity::from_name(name);
        assert_eq!(parsed, severity);
        assert_eq!(parsed.color(), color);
        assert_eq!(parsed.icon(), icon);
    }
}
