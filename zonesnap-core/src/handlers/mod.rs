mod command_handler;
mod display_event_handler;
mod mouse_button_handler;
mod mouse_move_handler;
mod screen_change_handler;
mod window_handler;
