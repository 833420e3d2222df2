// Course scheduling: block grids and elective suggestions.
// Static demo payloads; no search over schedules is performed.

pub mod handlers;
