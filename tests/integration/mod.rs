mod live_postgres;
