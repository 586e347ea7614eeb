use lazy_static::lazy_static;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Page {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

lazy_static! {
    pub static ref FAQS: Vec<Faq> = vec![
        Faq {
            question: "What is your cancellation policy?",
            answer: "Free cancellation up to 24 hours before check-in.",
        },
        Faq {
            question: "Do you offer airport transportation?",
            answer: "Yes, we offer airport transportation at most locations.",
        },
        Faq {
            question: "Are pets allowed?",
            answer: "Some of our Amigo Hotels are pet-friendly.",
        },
        Faq {
            question: "What time is check-in and check-out?",
            answer: "Check-in: 3:00 PM, Check-out: 11:00 AM.",
        },
        Faq {
            question: "Do you have swimming pools?",
            answer: "Most of our Amigo Hotels feature swimming pools.",
        },
    ];
}

pub fn about() -> Page {
    Page {
        title: "About Amigo Hotels",
        body: "Amigo Hotels is a family of resorts, city hotels and lodges \
               across Mexico, built around warm and authentic hospitality.",
    }
}

pub fn contact() -> Page {
    Page {
        title: "Contact Us",
        body: "Reach us at hola@amigohotels.example or call +52 55 0000 0000. \
               Our reception desks are staffed around the clock.",
    }
}

pub fn faqs() -> &'static [Faq] {
    &FAQS
}
