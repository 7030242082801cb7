<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Search input for filtering photos</description>
   <name>txt_SearchInput</name>
   <tag></tag>
   <elementGuidId>review-search-input</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='text' and (@placeholder='Search' or @placeholder='Search photos...' or contains(@placeholder, 'Search'))]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>input[type='text'][placeholder*='Search'], input[type='search']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
