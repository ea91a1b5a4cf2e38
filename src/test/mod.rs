mod longport;
