mod construct_type;
mod symbol;
