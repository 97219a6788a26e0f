//! Placeholder event catalog served until a real schedule source exists.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::models::live::{LiveEvent, LiveStatus};

struct SeedLive {
    id: &'static str,
    title: &'static str,
    date: (i32, u32, u32),
    start: (u32, u32),
    end: (u32, u32),
    total_slots: u32,
    available_slots: u32,
    status: LiveStatus,
    description: &'static str,
    category: &'static str,
    location: &'static str,
}

const SEED: [SeedLive; 8] = [
    SeedLive {
        id: "1",
        title: "THE BOX CLUB Live – Artisan Products",
        date: (2024, 1, 24), start: (19, 0), end: (22, 0),
        total_slots: 9, available_slots: 7,
        status: LiveStatus::Available,
        description: "Special edition dedicated to artisan and handmade products",
        category: "Arte", location: "Studio A",
    },
    SeedLive {
        id: "2",
        title: "THE BOX CLUB Live – Fashion & Accessories",
        date: (2024, 2, 1), start: (19, 0), end: (22, 0),
        total_slots: 9, available_slots: 2,
        status: LiveStatus::FewLeft,
        description: "Showcase of fashion, accessories and personal style",
        category: "Moda", location: "Studio B",
    },
    SeedLive {
        id: "3",
        title: "THE BOX CLUB Live – Tech & Gadgets",
        date: (2024, 2, 8), start: (19, 0), end: (22, 0),
        total_slots: 9, available_slots: 0,
        status: LiveStatus::Full,
        description: "The latest in technology and innovative gadgets",
        category: "Tecnología", location: "Studio A",
    },
    SeedLive {
        id: "4",
        title: "Live Beauty & Skincare",
        date: (2024, 2, 10), start: (14, 0), end: (16, 0),
        total_slots: 6, available_slots: 3,
        status: LiveStatus::Available,
        description: "Beauty, skincare and self-care brands",
        category: "Belleza", location: "Studio A",
    },
    SeedLive {
        id: "5",
        title: "Live Home & Deco",
        date: (2024, 2, 10), start: (17, 0), end: (18, 30),
        total_slots: 4, available_slots: 1,
        status: LiveStatus::FewLeft,
        description: "Home goods, decoration and design",
        category: "Hogar", location: "Studio B",
    },
    SeedLive {
        id: "6",
        title: "Live Wellness & Fitness",
        date: (2024, 2, 11), start: (19, 0), end: (20, 0),
        total_slots: 3, available_slots: 0,
        status: LiveStatus::Waiting,
        description: "Wellness, fitness and healthy living",
        category: "Wellness", location: "Studio C",
    },
    SeedLive {
        id: "7",
        title: "Live Food & Gourmet",
        date: (2024, 2, 12), start: (20, 0), end: (21, 30),
        total_slots: 4, available_slots: 2,
        status: LiveStatus::FewLeft,
        description: "Gourmet food, sauces and sweets",
        category: "Comida", location: "Studio B",
    },
    SeedLive {
        id: "8",
        title: "Live Fashion Outlet",
        date: (2024, 2, 13), start: (18, 0), end: (19, 0),
        total_slots: 3, available_slots: 1,
        status: LiveStatus::FewLeft,
        description: "End-of-season fashion outlet",
        category: "Moda", location: "Studio C",
    },
];

pub fn seed_lives() -> Vec<LiveEvent> {
    SEED.iter().filter_map(to_live).collect()
}

fn to_live(seed: &SeedLive) -> Option<LiveEvent> {
    let (y, m, d) = seed.date;
    Some(LiveEvent {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        start_time: NaiveTime::from_hms_opt(seed.start.0, seed.start.1, 0)?,
        end_time: NaiveTime::from_hms_opt(seed.end.0, seed.end.1, 0)?,
        total_slots: seed.total_slots,
        available_slots: seed.available_slots,
        status: seed.status,
        description: seed.description.to_string(),
        category: seed.category.to_string(),
        location: seed.location.to_string(),
    })
}
