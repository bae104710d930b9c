use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::service::dto::ReminderDto;

pub const DEFAULT_ENDPOINT: &str = "https://api.pushbullet.com/v2/pushes";
const PUSH_TYPE: &str = "note";

/// Request body for a single push.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notification {
    pub device_iden: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub body: String,
    pub guid: Uuid,
}

impl Notification {
    pub fn from_reminder(target: &str, reminder: &ReminderDto) -> Self {
        Self {
            device_iden: target.to_string(),
            kind: PUSH_TYPE.to_string(),
            title: reminder.description.clone(),
            body: reminder.to_string(),
            guid: message_id(reminder),
        }
    }
}

/// Stable per occurrence, so the receiving service can drop repeats.
pub fn message_id(reminder: &ReminderDto) -> Uuid {
    let name = format!("{}|{}", reminder.date.format("%Y-%m-%d"), reminder.description);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

pub trait Notifier {
    fn send(&self, notification: &Notification) -> Result<()>;
}

pub struct PushNotifier {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl PushNotifier {
    pub fn new(endpoint: Option<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token,
        }
    }
}

impl Notifier for PushNotifier {
    fn send(&self, notification: &Notification) -> Result<()> {
        let mut request = self.client.post(&self.endpoint).json(notification);
        if let Some(token) = &self.token {
            request = request.header("Access-Token", token);
        }

        let response = request
            .send()
            .with_context(|| format!("Could not reach {}", self.endpoint))?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Push rejected with status {}", status));
        }
        Ok(())
    }
}

/// Pushes every reminder, logging failures instead of returning them.
/// Returns how many were delivered.
pub fn dispatch<N: Notifier + ?Sized>(notifier: &N, target: &str, reminders: &[ReminderDto]) -> usize {
    let mut delivered = 0;
    for reminder in reminders {
        let notification = Notification::from_reminder(target, reminder);
        match notifier.send(&notification) {
            Ok(()) => {
                log::info!("Pushed \"{}\" ({})", notification.body, notification.guid);
                delivered += 1;
            }
            Err(e) => log::warn!("Could not push \"{}\": {:#}", notification.body, e),
        }
    }
    delivered
}
