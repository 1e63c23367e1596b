pub mod ingest_server;
