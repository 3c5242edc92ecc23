pub mod bill_mapper;
