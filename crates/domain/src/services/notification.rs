//! Notification message rendering.
//!
//! Builds the human-readable e-mail notices sent after a booking request is
//! created: a submission receipt for the customer and a new-request alert
//! for the hotel. Rendering is pure; delivery lives in the API layer's
//! notification queue.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::booking::BookingRequest;
use crate::models::hotel::Hotel;

/// A rendered e-mail notice ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct BookingNotice {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Stay parameters for a batch group inquiry (mail-relay endpoint).
#[derive(Debug, Clone)]
pub struct GroupStay {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub quad_rooms: i32,
    pub triple_rooms: i32,
    pub double_rooms: i32,
    pub single_rooms: i32,
    pub number_of_adults: i32,
    pub number_of_children: i32,
}

fn room_summary(
    quad: i32,
    triple: i32,
    double: i32,
    single: i32,
) -> String {
    format!(
        "Room configuration:\n\
         - Quad rooms (4 beds): {quad}\n\
         - Triple rooms (3 beds): {triple}\n\
         - Double rooms (2 beds): {double}\n\
         - Single rooms (1 bed): {single}"
    )
}

/// Renders the submission receipt sent to the customer.
pub fn render_customer_receipt(
    booking: &BookingRequest,
    hotel: &Hotel,
    base_url: &str,
) -> BookingNotice {
    let company_line = if booking.is_business {
        match &booking.travel_company_name {
            Some(company) => format!("Travel company: {}\n", company),
            None => String::new(),
        }
    } else {
        String::new()
    };

    let body = format!(
        "Dear {name},\n\n\
         Thank you for your booking request with Booksa. We have received your \
         request for {hotel_name}. Here are the details:\n\n\
         Check-in: {check_in}\n\
         Check-out: {check_out}\n\n\
         {rooms}\n\n\
         Total guests: {adults} adults, {children} children\n\
         Breakfast included: {breakfast}\n\
         {company_line}\n\
         You can track the status of your booking here:\n\
         {base_url}/booking/{booking_id}\n\n\
         We will notify you once the hotel has reviewed your request.\n\n\
         Best regards,\n\
         The Booksa Team",
        name = booking.name,
        hotel_name = hotel.name,
        check_in = booking.check_in_date,
        check_out = booking.check_out_date,
        rooms = room_summary(
            booking.quad_rooms,
            booking.triple_rooms,
            booking.double_rooms,
            booking.single_rooms
        ),
        adults = booking.number_of_adults,
        children = booking.number_of_children,
        breakfast = if booking.breakfast_included { "Yes" } else { "No" },
        company_line = company_line,
        base_url = base_url,
        booking_id = booking.id,
    );

    BookingNotice {
        to: booking.email.clone(),
        to_name: Some(booking.name.clone()),
        subject: "Booking request submitted".to_string(),
        body,
    }
}

/// Renders the new-request alert sent to the hotel.
pub fn render_hotel_alert(
    booking: &BookingRequest,
    hotel: &Hotel,
    base_url: &str,
) -> BookingNotice {
    let company_line = if booking.is_business {
        match &booking.travel_company_name {
            Some(company) => format!("Travel company: {}\n", company),
            None => String::new(),
        }
    } else {
        String::new()
    };

    let body = format!(
        "Dear {hotel_name} admin,\n\n\
         You have received a new booking request:\n\n\
         Guest name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Country: {country}\n\
         Check-in: {check_in}\n\
         Check-out: {check_out}\n\n\
         {rooms}\n\n\
         Total guests: {adults} adults, {children} children\n\
         Breakfast included: {breakfast}\n\
         Business booking: {business}\n\
         {company_line}\n\
         Log in to your dashboard to confirm or decline this request:\n\
         {base_url}/hotel-admin\n\n\
         You can also view the request directly:\n\
         {base_url}/booking/{booking_id}\n\n\
         Best regards,\n\
         Booksa Reservations",
        hotel_name = hotel.name,
        name = booking.name,
        email = booking.email,
        phone = booking.phone_number,
        country = booking.country,
        check_in = booking.check_in_date,
        check_out = booking.check_out_date,
        rooms = room_summary(
            booking.quad_rooms,
            booking.triple_rooms,
            booking.double_rooms,
            booking.single_rooms
        ),
        adults = booking.number_of_adults,
        children = booking.number_of_children,
        breakfast = if booking.breakfast_included { "Yes" } else { "No" },
        business = if booking.is_business { "Yes" } else { "No" },
        company_line = company_line,
        base_url = base_url,
        booking_id = booking.id,
    );

    BookingNotice {
        to: hotel.email.clone(),
        to_name: Some(format!("{} Admin", hotel.name)),
        subject: "New booking request".to_string(),
        body,
    }
}

/// Renders a batch group-inquiry notice for one hotel (mail-relay endpoint).
pub fn render_group_inquiry(hotel_email: &str, stay: &GroupStay, base_url: &str) -> BookingNotice {
    let body = format!(
        "A new group booking inquiry has been submitted for your property.\n\n\
         Check-in: {check_in}\n\
         Check-out: {check_out}\n\n\
         {rooms}\n\n\
         Total guests: {adults} adults, {children} children\n\n\
         Log in to your dashboard to review incoming requests:\n\
         {base_url}/hotel-admin\n\n\
         Best regards,\n\
         Booksa Reservations",
        check_in = stay.check_in_date,
        check_out = stay.check_out_date,
        rooms = room_summary(
            stay.quad_rooms,
            stay.triple_rooms,
            stay.double_rooms,
            stay.single_rooms
        ),
        adults = stay.number_of_adults,
        children = stay.number_of_children,
        base_url = base_url,
    );

    BookingNotice {
        to: hotel_email.to_string(),
        to_name: None,
        subject: "New group booking inquiry".to_string(),
        body,
    }
}
