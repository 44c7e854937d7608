mod game;
mod game_stats;
mod player;
mod player_stats;
mod team;
