//! Links and messages used to share or plan a game at a pitch.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::{Coordinate, MessageStyle, ProfileName, Provider};

const UTM_PARAMS: &str = "utm_source=pitchfinder&utm_medium=referral&utm_campaign=student_project";
const CALENDAR_BASE_URL: &str = "https://calendar.google.com/calendar/render";

/// Google Maps itinerary between two points
pub fn directions_link(origin: Coordinate, destination: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}",
        origin.latitude, origin.longitude, destination.latitude, destination.longitude
    )
}

/// Providers with an online booking page
pub fn is_bookable(provider: Provider) -> bool {
    matches!(provider, Provider::UrbanSoccer | Provider::LeFive)
}

pub fn booking_link(provider: Provider) -> Option<String> {
    match provider {
        Provider::UrbanSoccer => Some(format!("https://www.urbansoccer.fr/?{}", UTM_PARAMS)),
        Provider::LeFive => Some(format!("https://lefive.fr/?{}", UTM_PARAMS)),
        Provider::FiveGeneric | Provider::PublicOther => None,
    }
}

pub fn web_search_link(query: &str) -> String {
    format!("https://www.google.com/search?q={}", urlencoding::encode(query))
}

/// Everything the share message mentions
#[derive(Debug, Clone)]
pub struct ShareDetails<'a> {
    pub user_name: &'a str,
    pub style: MessageStyle,
    pub pitch_name: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub players: u8,
    pub profile: ProfileName,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub directions_url: &'a str,
}

/// Message to paste in a group chat
pub fn share_message(details: &ShareDetails<'_>) -> String {
    let intro = match details.style {
        MessageStyle::Match => format!("{} a préparé le match ⚽", details.user_name),
        MessageStyle::Terrain => format!("{} a préparé le terrain 🏟️", details.user_name),
    };

    format!(
        "{intro}\n\n\
         📍 {name}\n\
         🗓 {date} • 🕒 {time}\n\
         👥 {players} joueurs\n\
         🚶 Profil: {profile}\n\
         📏 {dist} km • ⏱ ~{eta} min\n\
         🧭 Itinéraire: {directions}\n",
        intro = intro,
        name = details.pitch_name,
        date = details.date.format("%Y-%m-%d"),
        time = details.time.format("%H:%M"),
        players = details.players,
        profile = details.profile,
        dist = details.distance_km,
        eta = details.eta_minutes,
        directions = details.directions_url,
    )
}

/// Google Calendar "add event" link
pub fn calendar_link(
    title: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    details: &str,
    location: &str,
) -> String {
    let dates = format!(
        "{}/{}",
        start.format("%Y%m%dT%H%M%SZ"),
        end.format("%Y%m%dT%H%M%SZ")
    );

    let params = [
        ("action", "TEMPLATE"),
        ("text", title),
        ("dates", dates.as_str()),
        ("details", details),
        ("location", location),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", CALENDAR_BASE_URL, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_booking_links() {
        assert!(is_bookable(Provider::UrbanSoccer));
        assert!(is_bookable(Provider::LeFive));
        assert!(!is_bookable(Provider::FiveGeneric));
        assert!(booking_link(Provider::PublicOther).is_none());
        assert_eq!(
            booking_link(Provider::LeFive).as_deref(),
            Some("https://lefive.fr/?utm_source=pitchfinder&utm_medium=referral&utm_campaign=student_project")
        );
    }

    #[test]
    fn test_directions_link() {
        let link = directions_link(Coordinate::new(44.8378, -0.5792), Coordinate::new(44.85, -0.57));
        assert_eq!(
            link,
            "https://www.google.com/maps/dir/?api=1&origin=44.8378,-0.5792&destination=44.85,-0.57"
        );
    }

    #[test]
    fn test_web_search_link_encodes_query() {
        assert_eq!(
            web_search_link("Stade Chaban Delmas"),
            "https://www.google.com/search?q=Stade%20Chaban%20Delmas"
        );
    }

    #[test]
    fn test_share_message() {
        let details = ShareDetails {
            user_name: "Camille",
            style: MessageStyle::Terrain,
            pitch_name: "Stade Galin",
            date: NaiveDate::from_ymd_opt(2026, 5, 14).unwrap(),
            time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            players: 10,
            profile: ProfileName::StudentBudget,
            distance_km: 1.25,
            eta_minutes: 15,
            directions_url: "https://maps.example/dir",
        };

        let message = share_message(&details);

        assert!(message.starts_with("Camille a préparé le terrain 🏟️\n\n"));
        assert!(message.contains("📍 Stade Galin\n"));
        assert!(message.contains("🗓 2026-05-14 • 🕒 18:30\n"));
        assert!(message.contains("👥 10 joueurs\n"));
        assert!(message.contains("🚶 Profil: Student Budget\n"));
        assert!(message.contains("📏 1.25 km • ⏱ ~15 min\n"));
        assert!(message.ends_with("🧭 Itinéraire: https://maps.example/dir\n"));
    }

    #[test]
    fn test_calendar_link() {
        let start = Utc.with_ymd_and_hms(2026, 5, 14, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 5, 14, 19, 0, 0).unwrap();

        let link = calendar_link("Football - Stade", start, end, "See you", "Stade");

        assert!(link.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&"));
        assert!(link.contains("text=Football%20-%20Stade"));
        assert!(link.contains("dates=20260514T180000Z%2F20260514T190000Z"));
        assert!(link.contains("details=See%20you"));
        assert!(link.ends_with("location=Stade"));
    }
}
