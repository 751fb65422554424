mod background_tasks;
mod shutdown;
mod twin_lookup_policy;
mod twin_poll;
