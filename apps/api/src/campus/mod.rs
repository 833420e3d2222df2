// Campus services: dining, courts, study groups, transit.
// Pass-through payloads for external feeds; no decision logic lives here.

pub mod handlers;
