//! Notification email templates.
//!
//! Two emails go out per registration: an HTML receipt to the participant and
//! a plain-text notice to the organizers.

use crate::config::NotificationConfig;
use crate::model::Registration;
use crate::providers::{EmailBody, OutgoingEmail};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt::Write as _;

/// Asia/Kolkata is UTC+05:30 all year round.
const IST_OFFSET_MINUTES: i64 = 5 * 60 + 30;

/// Escape text for inclusion in HTML.
///
/// # Examples
///
/// ```
/// use fest_registration::templates::escape_html;
///
/// assert_eq!(
///     escape_html("<b>Tom & \"Jerry\"</b>"),
///     "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
/// );
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a timestamp as Indian local time, e.g. `18/10/2026, 3:04:05 pm`.
#[must_use]
pub fn format_ist(at: DateTime<Utc>) -> String {
    (at + TimeDelta::minutes(IST_OFFSET_MINUTES))
        .naive_utc()
        .format("%-d/%-m/%Y, %-I:%M:%S %P")
        .to_string()
}

/// Receipt sent to the participant.
#[must_use]
pub fn participant_receipt(
    registration: &Registration,
    config: &NotificationConfig,
) -> OutgoingEmail {
    let fest = escape_html(&config.fest_name);
    let name = escape_html(&registration.full_name);
    let college = escape_html(&registration.college);
    let dept = escape_html(&registration.department);
    let year = escape_html(&registration.year_of_study);
    let transaction_id = escape_html(&registration.transaction_id);
    let contact = escape_html(&config.contact_email);
    let total = registration.total_amount;

    let events = registration.events.iter().fold(String::new(), |mut out, event| {
        let _ = write!(out, "<p>✦ {}</p>", escape_html(event));
        out
    });

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>Registration Confirmed</title>
</head>
<body style="margin:0; padding:0; background:#0a0a0a; font-family:Arial, sans-serif; color:#ccc;">
  <div style="max-width:560px; margin:0 auto;">
    <div style="background:#111; padding:40px 32px; text-align:center;
                border-bottom:2px solid #f5c500;">
      <h1 style="font-size:32px; color:#f5c500; letter-spacing:6px; margin:0;">{fest}</h1>
    </div>
    <div style="padding:36px 32px; background:#111;">
      <h2 style="color:#eee; font-size:22px; margin-top:0;">You're Registered! 🎉</h2>
      <p style="color:#888; font-size:14px; line-height:1.6;">
        Hey <strong style="color:#eee">{name}</strong>, your registration for
        <strong style="color:#f5c500">{fest}</strong> has been received.
        Our team will verify your payment and confirm your slot.
      </p>

      <div style="font-size:11px; color:#f5c500; letter-spacing:3px; margin-top:20px;">
        PARTICIPANT DETAILS
      </div>
      <div style="font-size:15px; color:#eee; margin-top:4px;">{name}</div>
      <div style="font-size:13px; color:#888; margin-top:4px;">
        {college} &nbsp;|&nbsp; {dept} &nbsp;|&nbsp; Year {year}
      </div>

      <div style="font-size:11px; color:#f5c500; letter-spacing:3px; margin-top:20px;">
        SELECTED EVENTS
      </div>
      <div style="background:#0a0a0a; border:1px solid #252525;
                  padding:16px 20px; margin-top:12px;">
        {events}
      </div>

      <div style="padding:16px 20px; background:#0a0a0a;
                  border:1px solid #252525; margin-top:12px;">
        <span style="color:#888; font-size:13px;">Total Paid</span>
        <span style="color:#f5c500; font-size:20px; font-weight:bold; float:right;">₹{total}</span>
      </div>

      <div style="font-size:11px; color:#f5c500; letter-spacing:3px; margin-top:20px;">
        TRANSACTION ID
      </div>
      <div style="font-size:15px; color:#eee; margin-top:4px;">{transaction_id}</div>

      <div style="margin-top:28px; padding:16px; border:1px solid #f5c500;
                  font-size:13px; color:#aaa; line-height:1.7;">
        ⚡ Your payment is under verification.
        Once confirmed, you'll receive your event pass via email.<br><br>
        For queries, contact us at <a href="mailto:{contact}" style="color:#f5c500;">{contact}</a>
      </div>
    </div>
  </div>
</body>
</html>
"#
    );

    OutgoingEmail {
        from_name: config.fest_name.clone(),
        from_address: config.sender.clone(),
        to: registration.email.clone(),
        subject: format!("🎉 Registration Confirmed — {}", config.fest_name),
        body: EmailBody::Html(html),
    }
}

/// Notice sent to the organizers.
#[must_use]
pub fn organizer_notification(
    registration: &Registration,
    config: &NotificationConfig,
) -> OutgoingEmail {
    let text = format!(
        "New Registration Received
─────────────────────────
Name:     {name}
Email:    {email}
Phone:    {phone}
College:  {college}
Dept:     {dept} | Year {year}
Events:   {events}
Amount:   ₹{total}
TxID:     {transaction_id}
Time:     {time}
─────────────────────────
Verify payment and update status in the database dashboard.
",
        name = registration.full_name,
        email = registration.email,
        phone = registration.phone,
        college = registration.college,
        dept = registration.department,
        year = registration.year_of_study,
        events = registration.events.join(", "),
        total = registration.total_amount,
        transaction_id = registration.transaction_id,
        time = format_ist(registration.registered_at),
    );

    OutgoingEmail {
        from_name: format!("{} Bot", config.fest_name),
        from_address: config.sender.clone(),
        to: config.organizer_email.clone(),
        subject: format!("🆕 New Registration — {}", registration.full_name),
        body: EmailBody::Text(text),
    }
}
