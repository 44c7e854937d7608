mod game_stats;
mod games;
mod player_stats;
mod players;
mod retry;
mod team_stats;
