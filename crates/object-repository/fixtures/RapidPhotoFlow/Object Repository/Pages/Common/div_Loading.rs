<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Loading spinner/indicator</description>
   <name>div_Loading</name>
   <tag></tag>
   <elementGuidId>common-loading</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[contains(@class, 'loading') or contains(@class, 'spinner') or @aria-busy='true']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>.loading, .spinner, [aria-busy='true'], [data-testid='loading']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
