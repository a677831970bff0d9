pub mod virtualmachine;
