//! Selectable items backing the `projects` dialogue.
//!
//! Ids are assigned at construction time, starting at 1 in insertion order,
//! and never change afterwards.

use serde::Serialize;

/// A project that can be picked by number after `projects` lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectableItem {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub description: String,
}

impl SelectableItem {
    /// Everything shown below the title once the item is selected.
    pub fn detail(&self) -> String {
        format!("Summary: {}\n\n{}", self.summary, self.description)
    }

    /// Full text of the selection line: title, then detail.
    pub fn selection_text(&self) -> String {
        format!("{}\n{}", self.title, self.detail())
    }

    /// One entry of the numbered listing.
    pub fn listing_entry(&self) -> String {
        format!("{}) {}", self.id, self.title)
    }
}

/// Ordered, immutable-after-construction set of selectable items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<SelectableItem>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return the id it was given.
    ///
    /// Returns `None`, leaving the catalog unchanged, once every `u32` id is
    /// taken.
    pub fn add(&mut self, title: &str, summary: &str, description: &str) -> Option<u32> {
        let id = next_id(self.items.len())?;
        self.items.push(SelectableItem {
            id,
            title: title.to_string(),
            summary: summary.to_string(),
            description: description.to_string(),
        });
        Some(id)
    }

    /// Builder-style [`Catalog::add`].
    pub fn with(mut self, title: &str, summary: &str, description: &str) -> Self {
        if self.add(title, summary, description).is_none() {
            log::warn!("Catalog full, dropping {title:?}");
        }
        self
    }

    /// The canonical portfolio projects.
    pub fn portfolio() -> Self {
        Self::new()
            .with(ENGAGEMENT_TITLE, ENGAGEMENT_SUMMARY, ENGAGEMENT_DESCRIPTION)
            .with(EVENTS_TITLE, EVENTS_SUMMARY, EVENTS_DESCRIPTION)
            .with(NEXTGEN_TITLE, NEXTGEN_SUMMARY, NEXTGEN_DESCRIPTION)
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&SelectableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in id order.
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The numbered menu printed by `projects`.
    pub fn listing(&self) -> String {
        let mut menu = String::from("Select a project by number:\n");
        for item in &self.items {
            menu.push_str(&item.listing_entry());
            menu.push('\n');
        }
        menu
    }
}

/// Id for the item after `len` existing ones.
fn next_id(len: usize) -> Option<u32> {
    len.checked_add(1).and_then(|n| u32::try_from(n).ok())
}

// ---------------------------------------------------------------------------
// Portfolio data
// ---------------------------------------------------------------------------

const ENGAGEMENT_TITLE: &str = "🚀 Engagement API – Web3-Ready Content Interaction Platform";
const ENGAGEMENT_SUMMARY: &str = "Backend system for content engagement tracking, rewarding users, and future Web3 integration.";
const ENGAGEMENT_DESCRIPTION: &str = "\
Backend API powering content engagement, tying interactions (likes, comments, views) to potential rewards and future blockchain incentives.

Status: Actively in Development

Overview:
A NestJS-based backend API enabling secure content creation and interaction, designed to scale and integrate Web3 reward mechanisms in the future.

Key Features:
Implemented:
- User registration & secure login (JWT)
- Role-based permissions: Admin, User, Creator, Moderator
- Content creation & media management
- Likes, comments, and engagement tracking
- Cloud media uploads (Cloudinary)
- Email notifications (Nodemailer)

Planned:
- Web3 reward triggers & smart contract integration
- Rate-limiting & spam detection
- Pagination for all content lists
- User profile image upload & updates

Tech Stack:
- Framework: NestJS (TypeScript)
- Database: MongoDB (Mongoose)
- Authentication: JWT + Role-based Access Control
- Media Storage: Cloudinary
- Email Service: Nodemailer
- Web3 Integration: Modular smart contract layer (planned)

GitHub: https://github.com/vic-Gray/engagement-api";

const EVENTS_TITLE: &str = "📅 Event Management API – Role-Based Booking & Event Platform";
const EVENTS_SUMMARY: &str = "Backend API to manage events and bookings with secure role-based access for organizers and participants.";
const EVENTS_DESCRIPTION: &str = "\
A NestJS-based backend API designed to manage events, bookings, and user participation with secure role-based access. Built for scalable, reliable event platforms with future-ready real-time capabilities.

📝 Overview:
This API allows users to create, manage, and participate in events while maintaining secure authentication and role-based permissions. Ideal for community-driven events, online/offline bookings, and platforms needing real-time updates.

💡 Key Features:
Implemented:
✅ User registration & secure login (JWT)
✅ Role-based access: Admin, Organizer, User
✅ Create, update, and manage events
✅ Book events, track attendance, and participation
✅ Transactional emails (booking confirmations, event updates) via Nodemailer
✅ Database-optimized queries for fast retrieval of event and booking data

Planned:
🔜 Real-time updates via WebSockets or Server-Sent Events (live event status, bookings)
🔜 Rate limiting & spam protection
🔜 Pagination for event and booking lists
🔜 User profile management (profile images, preferences)
🔜 Enhanced analytics for events (attendance trends, engagement metrics)

🛠 Tech Stack:
- Framework: NestJS (TypeScript)
- Database: PostgreSQL (with TypeORM ORM)
- Authentication: JWT tokens with access & refresh support
- Email Service: Nodemailer
- Real-time: WebSocket/SSE integration planned
- Role-Based Access Control: Admin, Organizer, User

🔗 GitHub: https://github.com/vic-Gray/event-api";

const NEXTGEN_TITLE: &str = "🌐 Next-Gen – Frontend Experience Platform";
const NEXTGEN_SUMMARY: &str = "Frontend web app for personal growth, habits, and productivity tracking with interactive dashboards.";
const NEXTGEN_DESCRIPTION: &str = "\
A modern, TypeScript-powered front-end web application focused on user experience and personal growth modules. Built with React/Next.js, it delivers an interactive, responsive, and scalable UI for personal improvement tools and dashboards.

📝 Overview:
Interactive front-end interface for tracking personal growth, habits, and productivity. Modular design ensures scalability and future backend integration.

💡 Key Features:
✅ Interactive dashboards
✅ Responsive UI (mobile + desktop)
✅ Component-based architecture
✅ TypeScript type safety
✅ Dynamic routing & page transitions
✅ Theme toggling (light/dark)
✅ Performance optimizations
✅ API integration ready

🛠 Tech Stack:
React / Next.js, TypeScript, CSS/Tailwind, API-ready

🔗 GitHub: https://github.com/vic-Gray/next-Gen
🔗 Live Demo: https://next-gen-ten-gamma.vercel.app";
