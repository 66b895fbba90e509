//! # Seed Data
//!
//! The built-in catalog and the static bundle content shown in every
//! detail view.
//!
//! ## What Every Bundle Contains
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Detail view ("Подробнее")                                             │
//! │                                                                         │
//! │  Обзор     rating, financial parameters, PACKAGE_CONTENTS              │
//! │  Анализ    SWOT_ANALYSIS (four lists), TARGET_AUDIENCE (four traits)   │
//! │  Мануал    LAUNCH_STAGES (step, title, duration, description)          │
//! │                                                                         │
//! │  All of it is the same for every item.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::types::{Category, Item, ItemId, Rating};

/// What is included in every business-idea bundle.
pub const PACKAGE_CONTENTS: [&str; 6] = [
    "Детальный бизнес-план на 30+ страниц",
    "Финансовая модель с расчётами",
    "Маркетинговая стратегия",
    "Пошаговая инструкция запуска",
    "Список поставщиков и партнёров",
    "30 дней поддержки эксперта",
];

/// One step of the launch manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchStage {
    pub step: u8,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

/// The launch manual shared by every bundle, in order.
pub const LAUNCH_STAGES: [LaunchStage; 5] = [
    LaunchStage {
        step: 1,
        title: "Регистрация бизнеса",
        duration: "1-2 недели",
        description: "Выбор формы, регистрация ИП/ООО, открытие счёта",
    },
    LaunchStage {
        step: 2,
        title: "Поиск помещения",
        duration: "2-4 недели",
        description: "Анализ локаций, переговоры с арендодателями",
    },
    LaunchStage {
        step: 3,
        title: "Закупка оборудования",
        duration: "3-6 недель",
        description: "Выбор поставщиков, заказ, монтаж оборудования",
    },
    LaunchStage {
        step: 4,
        title: "Найм персонала",
        duration: "2-3 недели",
        description: "Размещение вакансий, собеседования, обучение",
    },
    LaunchStage {
        step: 5,
        title: "Маркетинг и запуск",
        duration: "2-4 недели",
        description: "Создание сайта, соцсети, реклама, soft opening",
    },
];

/// SWOT lists on the analysis tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwotAnalysis {
    pub strengths: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub threats: &'static [&'static str],
}

pub const SWOT_ANALYSIS: SwotAnalysis = SwotAnalysis {
    strengths: &[
        "Высокий спрос на рынке",
        "Низкая конкуренция",
        "Масштабируемая модель",
    ],
    opportunities: &[
        "Рост рынка 15% в год",
        "Поддержка государства",
        "Экспорт услуг",
    ],
    weaknesses: &["Высокий порог входа", "Зависимость от поставщиков"],
    threats: &["Изменение законодательства", "Рост цен на сырьё"],
};

/// One line of the target audience block, e.g. `Возраст: 25-45 лет`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudienceTrait {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TARGET_AUDIENCE: [AudienceTrait; 4] = [
    AudienceTrait {
        label: "Возраст",
        value: "25-45 лет",
    },
    AudienceTrait {
        label: "Доход",
        value: "средний и выше среднего",
    },
    AudienceTrait {
        label: "География",
        value: "города 500K+ населения",
    },
    AudienceTrait {
        label: "Интересы",
        value: "технологии, качество жизни, экология",
    },
];

struct SeedRecord {
    id: u32,
    title: &'static str,
    description: &'static str,
    price: i64,
    rating: Rating,
    reviews: u32,
    category: Category,
    image: &'static str,
    investment: &'static str,
    payback: &'static str,
}

const SEED: [SeedRecord; 6] = [
    SeedRecord {
        id: 1,
        title: "Автоматизированная кофейня",
        description: "Кофейня с роботом-бариста без персонала. Полная автоматизация процесса.",
        price: 15000,
        rating: Rating::new(48),
        reviews: 124,
        category: Category::HoReCa,
        image: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=800&q=80",
        investment: "2-5 млн ₽",
        payback: "12-18 мес",
    },
    SeedRecord {
        id: 2,
        title: "Онлайн-школа нейросетей",
        description: "Образовательная платформа по работе с AI для бизнеса и личных целей.",
        price: 12000,
        rating: Rating::new(49),
        reviews: 89,
        category: Category::Education,
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
        investment: "300-500 тыс ₽",
        payback: "6-9 мес",
    },
    SeedRecord {
        id: 3,
        title: "Сервис аренды гаджетов",
        description: "Платформа для краткосрочной аренды электроники: камеры, дроны, VR.",
        price: 18000,
        rating: Rating::new(47),
        reviews: 156,
        category: Category::Technology,
        image: "https://images.unsplash.com/photo-1588508065123-287b28e013da?w=800&q=80",
        investment: "1-3 млн ₽",
        payback: "10-14 мес",
    },
    SeedRecord {
        id: 4,
        title: "Экологичная упаковка",
        description: "Производство биоразлагаемой упаковки для ресторанов и магазинов.",
        price: 20000,
        rating: Rating::new(46),
        reviews: 93,
        category: Category::Manufacturing,
        image: "https://images.unsplash.com/photo-1607619056574-7b8d3ee536b2?w=800&q=80",
        investment: "5-10 млн ₽",
        payback: "18-24 мес",
    },
    SeedRecord {
        id: 5,
        title: "Сервис личного помощника",
        description: "AI-ассистент для планирования дня, встреч и напоминаний через Telegram.",
        price: 8000,
        rating: Rating::new(49),
        reviews: 201,
        category: Category::SaaS,
        image: "https://images.unsplash.com/photo-1512428559087-560fa5ceab42?w=800&q=80",
        investment: "100-300 тыс ₽",
        payback: "3-6 мес",
    },
    SeedRecord {
        id: 6,
        title: "Мобильный груминг",
        description: "Выездной салон красоты для домашних питомцев на базе микроавтобуса.",
        price: 11000,
        rating: Rating::new(45),
        reviews: 67,
        category: Category::Services,
        image: "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=800&q=80",
        investment: "800 тыс - 1.5 млн ₽",
        payback: "12-15 мес",
    },
];

/// Returns the six built-in catalog items in display order.
pub fn seed_items() -> Vec<Item> {
    SEED.iter()
        .map(|r| Item {
            id: ItemId::new(r.id),
            title: r.title.to_string(),
            description: r.description.to_string(),
            price: Money::from_units(r.price),
            rating: r.rating,
            reviews: r.reviews,
            category: r.category,
            image: r.image.to_string(),
            investment: r.investment.to_string(),
            payback: r.payback.to_string(),
        })
        .collect()
}
