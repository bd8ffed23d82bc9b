use std::sync::Arc;

use tera::{Context, Tera};
use tracing::warn;

use crate::domain::models::{management::Management, slot::ReceptionSlot};
use crate::domain::ports::EmailService;

/// Dispatches the post-booking emails: a confirmation to the booker and a
/// notice to the reception admin. The booking has already been committed at
/// this point, so failures are logged and never propagated.
pub async fn send_booking_notifications(
    email_service: &Arc<dyn EmailService>,
    templates: &Tera,
    slot: &ReceptionSlot,
    management: &Management,
    booker_name: &str,
    admin_email: &str,
) {
    let Some(booker) = slot.booked_by.clone() else {
        return;
    };

    let mut context = Context::new();
    context.insert("booker_name", booker_name);
    context.insert("manager_name", &management.full_name);
    context.insert("manager_position", &management.position);
    context.insert("date", &slot.date.format("%Y-%m-%d").to_string());
    context.insert("start_time", &slot.start_time.format("%H:%M").to_string());
    context.insert("end_time", &slot.end_time.format("%H:%M").to_string());
    context.insert("booked_by", &booker);
    context.insert("notes", &slot.notes.clone().unwrap_or_default());

    match templates.render("booking_confirmation.html", &context) {
        Ok(body) => {
            if let Err(e) = email_service
                .send(&booker, "Reception booking confirmed", &body)
                .await
            {
                warn!("Confirmation email failed for slot {}: {:?}", slot.id, e);
            }
        }
        Err(e) => warn!("Failed to render confirmation template: {:?}", e),
    }

    match templates.render("admin_notification.html", &context) {
        Ok(body) => {
            if let Err(e) = email_service
                .send(admin_email, "New reception booking", &body)
                .await
            {
                warn!("Admin notification failed for slot {}: {:?}", slot.id, e);
            }
        }
        Err(e) => warn!("Failed to render admin notification template: {:?}", e),
    }
}
