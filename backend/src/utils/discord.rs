use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug)]
pub struct DiscordConfig {
    pub webhook_url: String,
}

impl DiscordConfig {
    pub fn from_env() -> Result<Self, String> {
        let webhook_url = std::env::var("DISCORD_WEBHOOK_URL")
            .map_err(|_| "Discord webhook URL not configured".to_string())?;
        if webhook_url.is_empty() {
            return Err("Discord webhook URL not configured".to_string());
        }
        Ok(Self { webhook_url })
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Discord embed carrying the four contact fields plus a timestamp.
pub fn contact_embed(payload: &ContactPayload, timestamp: &str) -> Value {
    json!({
        "embeds": [{
            "title": "📬 New Contact Message",
            "description": "A new message was received through the portfolio contact form.",
            "color": 0x2ecc71,
            "fields": [
                {
                    "name": "👤 Name",
                    "value": format!("`{}`", payload.name),
                    "inline": true
                },
                {
                    "name": "📧 Email",
                    "value": format!("`{}`", payload.email),
                    "inline": true
                },
                {
                    "name": "\u{200B}",
                    "value": "\u{200B}",
                    "inline": true
                },
                {
                    "name": "📝 Subject",
                    "value": format!("```{}```", payload.subject),
                    "inline": false
                },
                {
                    "name": "💬 Message",
                    "value": format!("```{}```", payload.message),
                    "inline": false
                }
            ],
            "timestamp": timestamp,
            "footer": {
                "text": "Portfolio - Contact System"
            },
            "author": {
                "name": "Notification System"
            }
        }]
    })
}

/// Single best-effort POST to the webhook. The caller surfaces the error
/// text to the user, so every failure path reduces to a String.
pub async fn forward_contact(
    client: &reqwest::Client,
    config: &DiscordConfig,
    payload: &ContactPayload,
) -> Result<(), String> {
    let body = contact_embed(payload, &Utc::now().to_rfc3339());

    let response = client
        .post(&config.webhook_url)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.status().is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Failed to send message to Discord: {}", error_text));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    #[test]
    fn embed_carries_all_four_fields_and_timestamp() {
        let embed = contact_embed(&payload(), "2026-08-27T12:00:00+00:00");
        let e = &embed["embeds"][0];
        assert_eq!(e["color"], 0x2ecc71);
        assert_eq!(e["timestamp"], "2026-08-27T12:00:00+00:00");

        let fields = e["fields"].as_array().unwrap();
        let values: Vec<&str> = fields.iter().map(|f| f["value"].as_str().unwrap()).collect();
        assert!(values.iter().any(|v| v.contains("John Doe")));
        assert!(values.iter().any(|v| v.contains("john@example.com")));
        assert!(values.iter().any(|v| v.contains("Hello")));
        assert!(values.iter().any(|v| v.contains("I would like to talk")));
    }

    #[test]
    fn name_and_email_are_inline_message_blocks_are_not() {
        let embed = contact_embed(&payload(), "2026-08-27T12:00:00+00:00");
        let fields = embed["embeds"][0]["fields"].as_array().unwrap();
        assert_eq!(fields[0]["inline"], true);
        assert_eq!(fields[1]["inline"], true);
        assert_eq!(fields[3]["inline"], false);
        assert_eq!(fields[4]["inline"], false);
    }

    #[test]
    fn payload_deserializes_from_client_json() {
        let p: ContactPayload = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@example.com","subject":"Hi","message":"A long enough message."}"#,
        )
        .unwrap();
        assert_eq!(p.name, "Jane");
        assert_eq!(p.subject, "Hi");
    }

    #[test]
    fn missing_webhook_url_is_a_configuration_error() {
        std::env::remove_var("DISCORD_WEBHOOK_URL");
        let err = DiscordConfig::from_env().unwrap_err();
        assert_eq!(err, "Discord webhook URL not configured");
    }
}
