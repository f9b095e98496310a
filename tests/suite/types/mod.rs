mod message_formatter;
mod stack_trace;
