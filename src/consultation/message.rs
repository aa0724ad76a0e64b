//! Prefilled WhatsApp messages and the deep links that carry them.

use crate::config;
use crate::consultation::request::ConsultationRequest;

/// Form service codes and the names used in outgoing messages.
pub const SERVICES: &[(&str, &str)] = &[
    ("lucky-number", "Lucky Mobile Number"),
    ("name-correction", "Name Correction"),
    ("career", "Career Guidance"),
    ("marriage", "Marriage Match Making"),
    ("business", "Business Consultation"),
    ("face-reading", "Face Reading"),
    ("numerology", "Pythagoras Numerology"),
    ("tarot", "Tarot Reading"),
    ("rudraksha", "Rudraksha Remedies"),
];

/// Display name for a service code. Unknown codes are returned unchanged.
pub fn service_display_name(code: &str) -> &str {
    SERVICES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

pub fn whatsapp_link(text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(text)
    )
}

pub fn consultation_message(request: &ConsultationRequest) -> String {
    let message = if request.message.is_empty() {
        "No specific message provided"
    } else {
        request.message.as_str()
    };

    format!(
        "🌟 *New Consultation Request - Shree Astrotalks* 🌟

📝 *Personal Details:*
• Name: {}
• Email: {}
• Phone: {}
• Birth Date: {}

🔮 *Service Requested:* {}

💬 *Message:* {}

🙏 Thank you for choosing Shree Astrotalks for your spiritual guidance!",
        request.name,
        request.email,
        request.phone,
        request.birth_date,
        service_display_name(&request.service),
        message,
    )
}

pub fn offer_message(title: &str, price: &str) -> String {
    format!(
        "🎯 *Special Offer Request - Shree Astrotalks* 🎯

🎁 *Offer:* {}
💰 *Price:* {}

👋 Hi! I'm interested in this special offer. Please provide me with more details and booking information.

🙏 Thank you!",
        title, price,
    )
}

pub const ONE_TO_ONE_MESSAGE: &str = "🙏 *One-to-One Consultation Request - Shree Astrotalks* 🙏

Hi! I would like to book a personal consultation session with your expert astrologer.

Please let me know:
• Available time slots
• Consultation charges
• How we can proceed

Thank you for your guidance! 🌟";

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::consultation::request::tests::valid_request;

    #[rstest]
    #[case("career", "Career Guidance")]
    #[case("tarot", "Tarot Reading")]
    #[case("rudraksha", "Rudraksha Remedies")]
    #[case("palmistry", "palmistry")]
    fn maps_service_codes(#[case] code: &str, #[case] name: &str) {
        assert_eq!(service_display_name(code), name);
    }

    #[test]
    fn consultation_message_embeds_every_field() {
        let mut request = valid_request();
        request.message = "Need guidance on a job offer".to_string();

        let text = consultation_message(&request);

        assert!(text.contains("Career Guidance"));
        for value in [
            &request.name,
            &request.email,
            &request.phone,
            &request.birth_date,
            &request.message,
        ] {
            assert!(text.contains(value.as_str()), "missing {:?}", value);
        }
    }

    #[test]
    fn empty_message_gets_placeholder() {
        let text = consultation_message(&valid_request());
        assert!(text.contains("💬 *Message:* No specific message provided"));
    }

    #[test]
    fn link_is_url_encoded() {
        let link = whatsapp_link("Hi there & welcome\n🙏");
        assert_eq!(
            link,
            "https://wa.me/917738961658?text=Hi%20there%20%26%20welcome%0A%F0%9F%99%8F"
        );
    }

    #[test]
    fn offer_message_names_title_and_price() {
        let text = offer_message("Business Success", "₹1,999");
        assert!(text.contains("🎁 *Offer:* Business Success"));
        assert!(text.contains("💰 *Price:* ₹1,999"));
    }
}
